// src/math/point_distribution/blobs/config.rs

use crate::math::error::{MathError, MathResult};

/// Konfiguration für die Erzeugung einer Blob-Punktwolke samt Start-Centroiden.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobDistributionConfig {
    /// Kantenlänge der quadratischen Zeichenfläche.
    pub canvas_size: f32,
    /// Gesamtzahl der Punkte (Blob-Punkte + Streupunkte).
    pub point_count: usize,
    /// Anzahl der Blobs und zugleich der Centroiden (K).
    pub cluster_count: usize,
    pub point_radius: f32,
    pub centroid_radius: f32,
    /// Maximaler Abstand eines Blob-Punkts vom Anker vor dem Gauß-Versatz.
    pub blob_radius: f32,
    /// Mittelwert des Gauß-Versatzes pro Achse.
    pub nudge_mean: f32,
    /// Standardabweichung des Gauß-Versatzes pro Achse.
    pub nudge_std_dev: f32,
    /// Anteil der Punkte, die um Blobs erzeugt werden, in `[0, 1]`.
    pub blob_point_ratio: f32,
    /// Obergrenze für das Rejection-Sampling eines Blob-Punkts.
    pub max_placement_attempts: usize,
}

impl Default for BlobDistributionConfig {
    fn default() -> Self {
        Self {
            canvas_size: 720.0,
            point_count: 2500,
            cluster_count: 4,
            point_radius: 1.0,
            centroid_radius: 8.0,
            blob_radius: 75.0,
            nudge_mean: 24.0,
            nudge_std_dev: 15.0,
            blob_point_ratio: 0.9,
            max_placement_attempts: 1000,
        }
    }
}

impl BlobDistributionConfig {
    /// Anzahl der Punkte, die um Blobs erzeugt werden; der Rest wird gestreut.
    pub fn blob_point_count(&self) -> usize {
        ((self.point_count as f32 * self.blob_point_ratio).round() as usize).min(self.point_count)
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.point_count == 0 {
            return Err(MathError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }
        if self.cluster_count == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "Cluster count must be greater than 0.".to_string(),
            });
        }
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Canvas size must be positive, got {}.", self.canvas_size),
            });
        }
        if !(self.point_radius.is_finite() && self.point_radius > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Point radius must be positive, got {}.", self.point_radius),
            });
        }
        if self.canvas_size <= 2.0 * self.point_radius {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Canvas size {} leaves no room for points of radius {}.",
                    self.canvas_size, self.point_radius
                ),
            });
        }
        if !(self.centroid_radius.is_finite() && self.centroid_radius > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Centroid radius must be positive, got {}.",
                    self.centroid_radius
                ),
            });
        }
        if !(self.blob_radius.is_finite() && self.blob_radius >= 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Blob radius must not be negative, got {}.", self.blob_radius),
            });
        }
        if !(self.nudge_mean.is_finite() && self.nudge_std_dev.is_finite())
            || self.nudge_std_dev < 0.0
        {
            return Err(MathError::InvalidConfiguration {
                message: "Nudge mean and standard deviation must be finite, the deviation non-negative."
                    .to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.blob_point_ratio) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Blob point ratio must lie in [0, 1], got {}.",
                    self.blob_point_ratio
                ),
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "At least one placement attempt is required.".to_string(),
            });
        }
        Ok(())
    }
}
