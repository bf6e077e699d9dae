// ./src/debug/ui.rs
use crate::debug::visualization::svg::SvgExportSettings;
use crate::math::probability::SeedResource;
use crate::sim::{
    resources::{KMeansParameters, OverlayMessage, SimulationPlayback},
    simulation::KMeansSimulation,
    systems::request_restart,
};
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use egui::{Align2, Area, Button, Color32, Id, RichText, Window};

pub fn simulation_control_ui_system(
    mut contexts: EguiContexts,
    mut playback: ResMut<SimulationPlayback>,
    mut simulation: ResMut<KMeansSimulation>,
    mut export: ResMut<SvgExportSettings>,
    params: Res<KMeansParameters>,
    seed: Res<SeedResource>,
) {
    Window::new("k-means")
        .default_width(260.0)
        .show(contexts.ctx_mut(), |ui| {
            let stats = simulation.stats().clone();
            ui.heading(format!("State: {}", simulation.state()));
            ui.label(format!("Run {} (seed {})", stats.run, seed.seed));
            ui.label(format!(
                "Passes: {}   Ticks: {}",
                stats.passes_completed, stats.ticks
            ));
            match stats.last_pass_inertia {
                Some(inertia) => ui.label(format!("Inertia (last pass): {:.1}", inertia)),
                None => ui.label("Inertia (last pass): -"),
            };
            ui.label(format!("Unassigned: {}", simulation.worklist().len()));
            if stats.clamped_placements > 0 {
                ui.label(format!("Clamped placements: {}", stats.clamped_placements));
            }

            ui.collapsing("Clusters", |ui| {
                for (index, (centroid, cluster)) in simulation
                    .centroids()
                    .iter()
                    .zip(simulation.clusters())
                    .enumerate()
                {
                    ui.label(
                        RichText::new(format!(
                            "#{}  {:>5} points  ({:.1}, {:.1})",
                            index,
                            cluster.len(),
                            centroid.position.x,
                            centroid.position.y
                        ))
                        .color(centroid.color.to_color32()),
                    );
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui
                    .button(if playback.paused { "▶ Play" } else { "⏸ Pause" })
                    .clicked()
                {
                    playback.paused = !playback.paused;
                }
                if ui.button("Step ▶").clicked() {
                    playback.execute_single_step_request = true;
                }
                let finished =
                    simulation.state().is_terminal() && !simulation.is_reset_pending();
                if ui.add_enabled(finished, Button::new("↺ Restart")).clicked() {
                    request_restart(&mut simulation, &params);
                }
            });
            if ui.button("Export SVG").clicked() {
                export.export_requested = true;
            }

            if *params != *simulation.params() {
                ui.label(RichText::new("Parameter changes apply on restart.").italics());
            }
        });
}

/// Blendet den Overlay-Text des Render-Adapters am unteren Rand ein.
pub fn overlay_message_system(mut contexts: EguiContexts, overlay: Res<OverlayMessage>) {
    let Some(message) = overlay.0.as_deref() else {
        return;
    };
    Area::new(Id::new("kmeans_overlay_message"))
        .anchor(Align2::CENTER_BOTTOM, [0.0, -16.0])
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(RichText::new(message).color(Color32::YELLOW).size(12.0));
        });
}
