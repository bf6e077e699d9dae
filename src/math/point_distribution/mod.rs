// src/math/point_distribution/mod.rs

// Deklaration der verschiedenen Punktverteilungs-Methoden/Module
pub mod blobs;

// Re-Exporte der wichtigsten Elemente aus den Untermodulen
pub use self::blobs::{BlobDistributionBuilder, BlobDistributionConfig, GeneratedRun};
