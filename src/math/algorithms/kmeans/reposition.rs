// src/math/algorithms/kmeans/reposition.rs

use crate::math::{
    error::{MathError, MathResult},
    types::{Centroid, Point2D},
    utils::interpolation::lerp_with_snap,
};

/// Kleinster zulässiger Einrast-Schwellwert. Darunter kann der f32-Schritt
/// `(b - a) * smoothing` auf Canvas-Koordinaten zu null runden.
pub const MIN_SNAP_THRESHOLD: f32 = 1e-3;

/// Parameter der Centroid-Interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepositionConfig {
    /// Anteil der Restdistanz, der pro Schritt zurückgelegt wird.
    pub smoothing: f32,
    /// Unterhalb dieser Restdistanz (pro Achse) rastet die Achse auf das Ziel ein.
    pub snap_threshold: f32,
}

impl Default for RepositionConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            snap_threshold: 0.1,
        }
    }
}

impl RepositionConfig {
    pub fn validate(&self) -> MathResult<()> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Smoothing must lie in (0, 1], got {}.", self.smoothing),
            });
        }
        if !(self.snap_threshold.is_finite() && self.snap_threshold >= MIN_SNAP_THRESHOLD) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Snap threshold must be finite and at least {}, got {}.",
                    MIN_SNAP_THRESHOLD, self.snap_threshold
                ),
            });
        }
        Ok(())
    }

    fn step(&self, position: Point2D, target: Point2D) -> Point2D {
        Point2D::new(
            lerp_with_snap(position.x, target.x, self.smoothing, self.snap_threshold),
            lerp_with_snap(position.y, target.y, self.smoothing, self.snap_threshold),
        )
    }
}

/// Bewegt jeden Centroid einen Schritt auf sein Ziel zu.
///
/// Gibt die Anzahl der Centroiden zurück, die danach exakt auf ihrem Ziel liegen.
pub fn advance_reposition(centroids: &mut [Centroid], config: &RepositionConfig) -> usize {
    let mut complete = 0;
    for centroid in centroids.iter_mut() {
        centroid.position = config.step(centroid.position, centroid.target);
        if centroid.is_at_target() {
            complete += 1;
        }
    }
    complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Hsba;
    use approx::assert_relative_eq;

    fn centroid_moving(from: (f32, f32), to: (f32, f32)) -> Centroid {
        let mut centroid = Centroid::new(Point2D::new(from.0, from.1), Hsba::WHITE, 8.0);
        centroid.target = Point2D::new(to.0, to.1);
        centroid
    }

    #[test]
    fn test_snaps_when_remaining_distance_is_below_threshold() {
        let mut centroids = [centroid_moving((0.0, 0.0), (1.0, 1.0))];
        let config = RepositionConfig {
            smoothing: 0.1,
            snap_threshold: 1.5,
        };
        let complete = advance_reposition(&mut centroids, &config);
        assert_eq!(centroids[0].position, Point2D::new(1.0, 1.0));
        assert_eq!(complete, 1);
    }

    #[test]
    fn test_moves_a_fraction_without_snapping() {
        let mut centroids = [centroid_moving((0.0, 0.0), (1.0, 0.0))];
        let config = RepositionConfig {
            smoothing: 0.1,
            snap_threshold: 0.05,
        };
        let complete = advance_reposition(&mut centroids, &config);
        assert_relative_eq!(centroids[0].position.x, 0.1);
        assert_eq!(centroids[0].position.y, 0.0);
        assert_eq!(complete, 0);
    }

    #[test]
    fn test_axes_snap_independently() {
        let mut centroids = [centroid_moving((0.0, 0.95), (10.0, 1.0))];
        let complete = advance_reposition(&mut centroids, &RepositionConfig::default());
        assert_relative_eq!(centroids[0].position.x, 1.0);
        assert_eq!(centroids[0].position.y, 1.0);
        assert_eq!(complete, 0);
    }

    #[test]
    fn test_reaches_target_in_finite_steps() {
        let mut centroids = [
            centroid_moving((0.0, 0.0), (700.0, 350.0)),
            centroid_moving((5.0, 5.0), (5.0, 5.0)),
        ];
        let config = RepositionConfig::default();
        let mut steps = 0;
        while advance_reposition(&mut centroids, &config) < centroids.len() {
            steps += 1;
            assert!(steps < 1000, "did not settle");
        }
        assert!(centroids.iter().all(Centroid::is_at_target));
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(RepositionConfig::default().validate().is_ok());
        let zero = RepositionConfig {
            smoothing: 0.0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());
        let negative = RepositionConfig {
            snap_threshold: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_vanishing_snap_threshold() {
        for snap_threshold in [0.0, 1e-6, MIN_SNAP_THRESHOLD / 2.0, f32::NAN] {
            let config = RepositionConfig {
                snap_threshold,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{} accepted", snap_threshold);
        }
        let smallest = RepositionConfig {
            snap_threshold: MIN_SNAP_THRESHOLD,
            ..Default::default()
        };
        assert!(smallest.validate().is_ok());
    }

    #[test]
    fn test_smallest_threshold_still_settles() {
        // Ziel mit Nachkommastellen, bei denen der Restschritt in f32 verschwindet
        let mut centroids = [
            centroid_moving((0.0, 0.0), (353.7, 412.9)),
            centroid_moving((719.0, 1.0), (0.3, 719.9)),
        ];
        let config = RepositionConfig {
            smoothing: 0.1,
            snap_threshold: MIN_SNAP_THRESHOLD,
        };
        assert!(config.validate().is_ok());
        let mut steps = 0;
        while advance_reposition(&mut centroids, &config) < centroids.len() {
            steps += 1;
            assert!(steps < 1000, "did not settle: {:?}", centroids[0].position);
        }
        assert_eq!(centroids[0].position, Point2D::new(353.7, 412.9));
    }
}
