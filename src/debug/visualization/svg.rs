// src/debug/visualization/svg.rs
use crate::math::types::{Centroid, Hsba, Point};
use crate::sim::{
    error::SimulationResult,
    render::RenderAdapter,
    simulation::{KMeansSimulation, RunStats},
};
use bevy::prelude::*;
use std::path::{Path, PathBuf};
use svg::Document;
use svg::Node;
use svg::node::element::{Circle, Line, Rectangle, Text};

/// Zielverzeichnis und anstehende Export-Anfrage für SVG-Frames.
#[derive(Resource, Debug)]
pub struct SvgExportSettings {
    pub output_dir: PathBuf,
    pub export_requested: bool,
}

impl Default for SvgExportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("svg_frames"),
            export_requested: false,
        }
    }
}

impl SvgExportSettings {
    /// z.B. `svg_frames/kmeans_run002_tick000137.svg`
    pub fn frame_path(&self, stats: &RunStats) -> PathBuf {
        self.output_dir
            .join(format!("kmeans_run{:03}_tick{:06}.svg", stats.run, stats.ticks))
    }
}

/// Render-Adapter, der einen Frame als SVG-Dokument aufbaut.
///
/// Gleiche Koordinaten wie die Zeichenfläche: Ursprung oben links, y nach unten.
pub struct SvgFrameRenderer {
    document: Document,
    canvas_size: f32,
}

impl SvgFrameRenderer {
    pub fn new(canvas_size: f32) -> Self {
        let mut document = Document::new()
            .set("width", canvas_size)
            .set("height", canvas_size)
            .set("viewBox", format!("0 0 {} {}", canvas_size, canvas_size));
        document.append(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", "black"),
        );
        Self {
            document,
            canvas_size,
        }
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    fn circle(x: f32, y: f32, radius: f32, color: Hsba) -> Circle {
        Circle::new()
            .set("cx", x)
            .set("cy", y)
            .set("r", radius)
            .set("fill", color.to_hex())
            .set("fill-opacity", color.alpha)
    }
}

impl RenderAdapter for SvgFrameRenderer {
    fn draw_line(&mut self, from: &Centroid, to: &Point) {
        self.document.append(
            Line::new()
                .set("x1", from.position.x)
                .set("y1", from.position.y)
                .set("x2", to.position.x)
                .set("y2", to.position.y)
                .set("stroke", from.color.to_hex())
                .set("stroke-opacity", from.color.alpha)
                .set("stroke-width", 1),
        );
    }

    fn draw_centroid(&mut self, centroid: &Centroid) {
        self.document.append(Self::circle(
            centroid.position.x,
            centroid.position.y,
            centroid.radius,
            centroid.color,
        ));
    }

    fn draw_point(&mut self, point: &Point) {
        self.document.append(Self::circle(
            point.position.x,
            point.position.y,
            point.radius,
            point.color,
        ));
    }

    fn draw_overlay_text(&mut self, message: &str) {
        self.document.append(
            Text::new(message)
                .set("x", self.canvas_size / 2.0)
                .set("y", self.canvas_size - 16.0)
                .set("text-anchor", "middle")
                .set("font-size", 12)
                .set("fill", "yellow"),
        );
    }
}

/// Schreibt den aktuellen Frame der Simulation als SVG-Datei.
pub fn export_frame_svg(simulation: &KMeansSimulation, path: &Path) -> SimulationResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut renderer = SvgFrameRenderer::new(simulation.params().canvas_size);
    simulation.render(&mut renderer);
    svg::save(path, &renderer.into_document())?;
    Ok(())
}

/// Exportiert einen Frame auf Tastendruck `S` oder Anfrage aus der UI.
pub fn export_svg_frame_system(
    keys: Res<ButtonInput<KeyCode>>,
    simulation: Res<KMeansSimulation>,
    mut export: ResMut<SvgExportSettings>,
) {
    if keys.just_pressed(KeyCode::KeyS) {
        export.export_requested = true;
    }
    if !std::mem::take(&mut export.export_requested) {
        return;
    }

    let path = export.frame_path(simulation.stats());
    match export_frame_svg(&simulation, &path) {
        Ok(()) => info!("Frame exported to {}", path.display()),
        Err(e) => error!("Could not export frame to {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{resources::KMeansParameters, state::SimulationState};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_simulation() -> KMeansSimulation {
        let params = KMeansParameters {
            point_count: 60,
            cluster_count: 3,
            points_per_tick: 20,
            ..Default::default()
        };
        KMeansSimulation::new(params, StdRng::seed_from_u64(21)).unwrap()
    }

    fn render_to_string(simulation: &KMeansSimulation) -> String {
        let mut renderer = SvgFrameRenderer::new(simulation.params().canvas_size);
        simulation.render(&mut renderer);
        renderer.into_document().to_string()
    }

    #[test]
    fn test_initial_frame_has_points_and_centroids() {
        let simulation = small_simulation();
        let svg = render_to_string(&simulation);
        assert_eq!(svg.matches("<circle").count(), 60 + 3);
        assert_eq!(svg.matches("<line").count(), 0);
        assert!(svg.contains("viewBox=\"0 0 720 720\""));
    }

    #[test]
    fn test_final_frame_has_message_and_no_centroids() {
        let mut simulation = small_simulation();
        for _ in 0..200_000 {
            if simulation.tick() == SimulationState::Final {
                break;
            }
        }
        assert_eq!(simulation.state(), SimulationState::Final);
        let svg = render_to_string(&simulation);
        assert_eq!(svg.matches("<circle").count(), 60);
        assert!(svg.contains("All done! Click to re-run"));
    }

    #[test]
    fn test_export_writes_file() {
        let simulation = small_simulation();
        let dir = std::env::temp_dir().join(format!("kmeans_sim_svg_{}", std::process::id()));
        let settings = SvgExportSettings {
            output_dir: dir.clone(),
            export_requested: false,
        };
        let path = settings.frame_path(simulation.stats());
        export_frame_svg(&simulation, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
        assert!(path.ends_with("kmeans_run001_tick000000.svg"));
        std::fs::remove_dir_all(dir).unwrap();
    }
}
