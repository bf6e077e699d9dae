// src/math/algorithms/kmeans/mod.rs

pub mod assignment;
pub mod reposition;

pub use self::assignment::{ClusterPass, PassOutcome, advance_clustering, nearest_centroid};
pub use self::reposition::{RepositionConfig, advance_reposition};
