// src/math/point_distribution/blobs/builder.rs

use crate::math::{
    error::MathResult,
    point_distribution::blobs::config::BlobDistributionConfig,
    types::{Bounds2D, Centroid, Point, Point2D},
    utils::random::{random_polar_offset, random_signed_gaussian},
};
use bevy::log::{debug, warn};
use rand::Rng;

/// Ergebnis einer Generierung: Punkte und die daraus abgeleiteten Start-Centroiden.
#[derive(Debug, Clone)]
pub struct GeneratedRun {
    pub points: Vec<Point>,
    pub centroids: Vec<Centroid>,
    /// Anzahl der Blob-Punkte, die nach `max_placement_attempts` Fehlversuchen
    /// ins Innere geklemmt wurden.
    pub clamped_placements: usize,
}

/// Erzeugt eine Punktwolke aus K Blobs plus gleichverteiltem Rauschen
/// und wählt K Punkte (mit Zurücklegen) als Start-Centroiden.
pub struct BlobDistributionBuilder {
    config: BlobDistributionConfig,
    point_bounds: Bounds2D,
}

impl BlobDistributionBuilder {
    pub fn new(config: BlobDistributionConfig) -> MathResult<Self> {
        config.validate()?;
        // Punkte dürfen mit ihrem Radius nicht über den Rand ragen
        let point_bounds = Bounds2D::square(config.canvas_size)?.shrink(config.point_radius)?;
        Ok(Self {
            config,
            point_bounds,
        })
    }

    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedRun {
        let config = &self.config;

        let blob_anchors: Vec<Point2D> = (0..config.cluster_count)
            .map(|_| self.point_bounds.random_point(rng))
            .collect();

        let blob_point_count = config.blob_point_count();
        let mut points = Vec::with_capacity(config.point_count);
        let mut clamped_placements = 0;

        for _ in 0..blob_point_count {
            let anchor = blob_anchors[rng.random_range(0..blob_anchors.len())];
            let (position, clamped) = self.place_near(anchor, rng);
            if clamped {
                clamped_placements += 1;
            }
            points.push(Point::new(position, config.point_radius));
        }

        // Streupunkte unabhängig von den Blobs
        for _ in blob_point_count..config.point_count {
            points.push(Point::new(
                self.point_bounds.random_point(rng),
                config.point_radius,
            ));
        }

        let centroids: Vec<Centroid> = (0..config.cluster_count)
            .map(|index| {
                let source = &points[rng.random_range(0..points.len())];
                Centroid::from_point(source, index, config.cluster_count, config.centroid_radius)
            })
            .collect();

        if clamped_placements > 0 {
            warn!(
                "{} of {} blob points exceeded {} placement attempts and were clamped into {}",
                clamped_placements, blob_point_count, config.max_placement_attempts, self.point_bounds
            );
        }
        debug!(
            "Generated {} points ({} around {} blobs) and {} centroids",
            points.len(),
            blob_point_count,
            blob_anchors.len(),
            centroids.len()
        );

        GeneratedRun {
            points,
            centroids,
            clamped_placements,
        }
    }

    /// Rejection-Sampling um einen Anker. Liefert die Position und ob geklemmt wurde.
    fn place_near(&self, anchor: Point2D, rng: &mut impl Rng) -> (Point2D, bool) {
        let config = &self.config;
        let mut candidate = anchor;
        for _ in 0..config.max_placement_attempts {
            let nudge = Point2D::new(
                random_signed_gaussian(config.nudge_mean, config.nudge_std_dev, rng),
                random_signed_gaussian(config.nudge_mean, config.nudge_std_dev, rng),
            );
            candidate = anchor + random_polar_offset(config.blob_radius, rng) + nudge;
            if self.point_bounds.strictly_contains_point(candidate) {
                return (candidate, false);
            }
        }
        (self.point_bounds.clamp_strictly_inside(candidate), true)
    }
}
