// src/math/algorithms/mod.rs

// Deklaration der verschiedenen Algorithmus-Kategorien
pub mod kmeans;

pub use self::kmeans::{
    ClusterPass, PassOutcome, RepositionConfig, advance_clustering, advance_reposition,
    nearest_centroid,
};
