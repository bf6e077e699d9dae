// src/sim/resources.rs
use super::error::{SimulationError, SimulationResult};
use crate::math::{algorithms::RepositionConfig, point_distribution::BlobDistributionConfig};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Konfiguration eines Laufs. Änderungen (z.B. über den Inspector) greifen
/// erst beim nächsten Reset.
#[derive(Resource, Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct KMeansParameters {
    // --- Zeichenfläche ---
    pub canvas_size: f32,
    pub point_radius: f32,
    pub centroid_radius: f32,

    // --- Punktwolke ---
    pub point_count: usize,
    pub cluster_count: usize,
    pub blob_radius: f32,
    pub nudge_mean: f32,
    pub nudge_std_dev: f32,
    pub blob_point_ratio: f32,
    pub max_placement_attempts: usize,

    // --- Animation ---
    /// Wie viele Punkte pro Tick zugeordnet werden.
    pub points_per_tick: usize,
    pub reposition_smoothing: f32,
    pub reposition_snap_threshold: f32,
}

impl Default for KMeansParameters {
    fn default() -> Self {
        let point_count = 2500;
        let point_radius = 1.0;
        Self {
            canvas_size: 720.0,
            point_radius,
            centroid_radius: point_radius * 8.0,

            point_count,
            cluster_count: 4,
            blob_radius: 75.0,
            nudge_mean: 24.0,
            nudge_std_dev: 15.0,
            blob_point_ratio: 0.9,
            max_placement_attempts: 1000,

            points_per_tick: point_count / 30,
            reposition_smoothing: 0.1,
            reposition_snap_threshold: 0.1,
        }
    }
}

impl KMeansParameters {
    pub fn validate(&self) -> SimulationResult<()> {
        if self.cluster_count == 0 {
            return Err(invalid("cluster_count", "at least one cluster is required"));
        }
        if self.point_count == 0 {
            return Err(invalid("point_count", "at least one point is required"));
        }
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(invalid(
                "canvas_size",
                format!("must be positive, got {}", self.canvas_size),
            ));
        }
        if self.points_per_tick == 0 {
            return Err(invalid("points_per_tick", "must be greater than 0"));
        }
        self.reposition_config()
            .validate()
            .map_err(|e| invalid("reposition", e.to_string()))?;
        self.blob_config()
            .validate()
            .map_err(|e| invalid("distribution", e.to_string()))?;
        Ok(())
    }

    pub fn blob_config(&self) -> BlobDistributionConfig {
        BlobDistributionConfig {
            canvas_size: self.canvas_size,
            point_count: self.point_count,
            cluster_count: self.cluster_count,
            point_radius: self.point_radius,
            centroid_radius: self.centroid_radius,
            blob_radius: self.blob_radius,
            nudge_mean: self.nudge_mean,
            nudge_std_dev: self.nudge_std_dev,
            blob_point_ratio: self.blob_point_ratio,
            max_placement_attempts: self.max_placement_attempts,
        }
    }

    pub fn reposition_config(&self) -> RepositionConfig {
        RepositionConfig {
            smoothing: self.reposition_smoothing,
            snap_threshold: self.reposition_snap_threshold,
        }
    }
}

fn invalid(parameter: &'static str, message: impl Into<String>) -> SimulationError {
    SimulationError::InvalidConfiguration {
        parameter,
        message: message.into(),
    }
}

/// Wiedergabesteuerung: Pause und Einzelschritt.
#[derive(Resource, Debug, Default)]
pub struct SimulationPlayback {
    pub paused: bool,
    pub execute_single_step_request: bool,
}

impl SimulationPlayback {
    /// Ob in diesem Frame ein Tick ausgeführt werden soll. Verbraucht eine
    /// anstehende Einzelschritt-Anfrage.
    pub fn take_tick(&mut self) -> bool {
        if !self.paused {
            return true;
        }
        std::mem::take(&mut self.execute_single_step_request)
    }
}

/// Vom Render-Adapter gesetzter Overlay-Text, angezeigt vom UI-System.
#[derive(Resource, Debug, Default)]
pub struct OverlayMessage(pub Option<String>);
