// src/math/types/mod.rs
pub mod bounds;
pub mod color;
pub mod point;

pub use bounds::*;
pub use color::*;
pub use point::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::Vec2;

// Canvas-Koordinaten: Ursprung oben links, y wächst nach unten
pub type Point2D = Vec2;
