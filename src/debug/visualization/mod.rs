pub mod gizmos;
pub mod svg;
