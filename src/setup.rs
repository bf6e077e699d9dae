// ./src/setup.rs
use bevy::prelude::*;

pub fn setup_scene(mut commands: Commands) {
    // Orthografische 2D-Kamera, Weltursprung in der Fenstermitte
    commands.spawn(Camera2dBundle::default());
}
