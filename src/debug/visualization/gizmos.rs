// src/debug/visualization/gizmos.rs
use crate::math::types::{Centroid, Point, Point2D};
use crate::sim::{render::RenderAdapter, resources::OverlayMessage, simulation::KMeansSimulation};
use bevy::prelude::*;

/// Segmentzahl für die kleinen Datenpunkte; Centroiden nutzen den Standard.
const POINT_SEGMENTS: usize = 8;

/// Canvas (Ursprung oben links, y nach unten) -> Bevy-Welt (Ursprung Mitte, y nach oben).
pub fn canvas_to_world(position: Point2D, canvas_size: f32) -> Vec2 {
    let half = canvas_size * 0.5;
    Vec2::new(position.x - half, half - position.y)
}

/// Render-Adapter, der über Bevy-Gizmos zeichnet.
///
/// Gizmos können keinen Text darstellen, der Overlay-Text wird deshalb
/// gesammelt und über [`OverlayMessage`] an die egui-Oberfläche übergeben.
pub struct GizmoRenderer<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    canvas_size: f32,
    overlay: Option<String>,
}

impl<'a, 'w, 's> GizmoRenderer<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, canvas_size: f32) -> Self {
        Self {
            gizmos,
            canvas_size,
            overlay: None,
        }
    }

    pub fn into_overlay(self) -> Option<String> {
        self.overlay
    }

    fn world(&self, position: Point2D) -> Vec2 {
        canvas_to_world(position, self.canvas_size)
    }
}

impl RenderAdapter for GizmoRenderer<'_, '_, '_> {
    fn draw_line(&mut self, from: &Centroid, to: &Point) {
        let (start, end) = (self.world(from.position), self.world(to.position));
        self.gizmos.line_2d(start, end, from.color.to_color());
    }

    fn draw_centroid(&mut self, centroid: &Centroid) {
        let center = self.world(centroid.position);
        self.gizmos
            .circle_2d(center, centroid.radius, centroid.color.to_color());
    }

    fn draw_point(&mut self, point: &Point) {
        let center = self.world(point.position);
        self.gizmos
            .circle_2d(center, point.radius, point.color.to_color())
            .segments(POINT_SEGMENTS);
    }

    fn draw_overlay_text(&mut self, message: &str) {
        self.overlay = Some(message.to_string());
    }
}

/// Zeichnet den aktuellen Simulationszustand, nachdem der Tick gelaufen ist.
pub fn draw_simulation_system(
    simulation: Res<KMeansSimulation>,
    mut gizmos: Gizmos,
    mut overlay: ResMut<OverlayMessage>,
) {
    let mut renderer = GizmoRenderer::new(&mut gizmos, simulation.params().canvas_size);
    simulation.render(&mut renderer);
    overlay.0 = renderer.into_overlay();
}
