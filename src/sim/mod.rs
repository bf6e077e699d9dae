pub mod error;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod state;
pub mod systems;
