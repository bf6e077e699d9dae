// ./src/main.rs
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

pub mod debug;
pub mod math;
pub mod setup;
pub mod sim;

use debug::{
    ui::{overlay_message_system, simulation_control_ui_system},
    visualization::{
        gizmos::draw_simulation_system,
        svg::{SvgExportSettings, export_svg_frame_system},
    },
};
use math::probability::SeedResource;
use setup::setup_scene;
use sim::error::SimulationError;
use sim::resources::*;
use sim::simulation::KMeansSimulation;
use sim::systems::*;

const SEED_ENV_VAR: &str = "KMEANS_SEED";

fn main() -> Result<(), SimulationError> {
    let params = KMeansParameters::default();
    // KMEANS_SEED: Zahl oder beliebiger Text, sonst zufällig
    let seed = std::env::var(SEED_ENV_VAR)
        .map(|value| SeedResource::parse(&value))
        .unwrap_or_default();
    // Ungültige Parameter brechen hier ab, bevor ein Fenster geöffnet wird
    let simulation = KMeansSimulation::new(params.clone(), seed.rng())?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "k-means".into(),
                resolution: WindowResolution::new(params.canvas_size, params.canvas_size),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .register_type::<KMeansParameters>()
        .add_plugins(ResourceInspectorPlugin::<KMeansParameters>::default())
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(params)
        .insert_resource(seed)
        .insert_resource(simulation)
        .init_resource::<SimulationPlayback>()
        .init_resource::<OverlayMessage>()
        .init_resource::<SvgExportSettings>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                // Block 1: Eingaben und UI
                reset_on_click_system,
                simulation_control_ui_system,
                // Block 2: genau ein Simulationsschritt
                simulation_tick_system,
                // Block 3: nur lesend zeichnen
                draw_simulation_system,
                overlay_message_system,
                export_svg_frame_system,
            )
                .chain(),
        )
        .run();

    Ok(())
}
