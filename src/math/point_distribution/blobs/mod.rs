// src/math/point_distribution/blobs/mod.rs

// Punktwolken um zufällig platzierte "Blob"-Anker plus gleichverteiltes Rauschen
pub mod builder;
pub mod config;

pub use self::builder::{BlobDistributionBuilder, GeneratedRun};
pub use self::config::BlobDistributionConfig;
