// src/sim/render.rs
use crate::math::types::{Centroid, Point};

/// Zeichenschnittstelle, über die die Simulation ihren Zustand ausgibt.
///
/// Die Simulation ruft sie nach jedem Tick nur lesend auf, siehe
/// [`KMeansSimulation::render`](super::simulation::KMeansSimulation::render).
pub trait RenderAdapter {
    /// Verbindungslinie zwischen einem Centroid und einem Punkt seines Clusters.
    fn draw_line(&mut self, from: &Centroid, to: &Point);
    fn draw_centroid(&mut self, centroid: &Centroid);
    fn draw_point(&mut self, point: &Point);
    fn draw_overlay_text(&mut self, message: &str);
}
