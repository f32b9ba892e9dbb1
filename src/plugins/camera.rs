use bevy::prelude::*;

use crate::plugins::StartupStage;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera.in_set(StartupStage::BuildCameras));
    }
}

/// The scene is laid out in window pixels, so a default 2D camera at the
/// origin shows exactly one screen.
fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Main Camera")));
}
