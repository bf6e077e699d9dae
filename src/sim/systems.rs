// src/sim/systems.rs
use super::resources::{KMeansParameters, SimulationPlayback};
use super::simulation::KMeansSimulation;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Führt pro Frame höchstens einen Tick aus (außer pausiert ohne Einzelschritt).
pub fn simulation_tick_system(
    mut simulation: ResMut<KMeansSimulation>,
    mut playback: ResMut<SimulationPlayback>,
) {
    if !playback.take_tick() {
        return;
    }

    // Zustandswechsel protokolliert die Simulation selbst
    simulation.tick();
}

/// Linksklick auf die Zeichenfläche startet einen neuen Lauf, sobald der alte fertig ist.
pub fn reset_on_click_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
    params: Res<KMeansParameters>,
    mut simulation: ResMut<KMeansSimulation>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    // Klicks auf egui-Fenster gehören nicht der Zeichenfläche
    if contexts.ctx_mut().is_pointer_over_area() {
        return;
    }
    request_restart(&mut simulation, &params);
}

/// Reicht die aktuellen Parameter als Reset-Anfrage weiter.
pub fn request_restart(simulation: &mut KMeansSimulation, params: &KMeansParameters) -> bool {
    match simulation.request_reset_with(params.clone()) {
        Ok(accepted) => {
            if accepted {
                info!("Restart requested (run {})", simulation.stats().run + 1);
            }
            accepted
        }
        Err(e) => {
            warn!("Restart refused: {}", e);
            false
        }
    }
}
