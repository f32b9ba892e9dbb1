use bevy::prelude::*;

use crate::plugins::StartupStage;
use crate::resources::Scenery;
use crate::systems::render::palette;
use crate::systems::{
    exit_on_escape_system, helicopter_transform_system, hud_update_system,
    parallax_scroll_system, rotor_animation_system, spawn_background, spawn_helicopter_visuals,
    spawn_hud,
};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum RenderSet {
    Layout, // Helicopter position and background scroll
    Animation,
    Hud,
}

/// Draws the scene from the helicopter state: body, rotors, parallax
/// background and HUD. Only reads simulation state.
pub struct SceneRenderPlugin;

impl Plugin for SceneRenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(palette::SKY))
            .init_resource::<Scenery>()
            .configure_sets(
                Update,
                (RenderSet::Layout, RenderSet::Animation, RenderSet::Hud).chain(),
            )
            .add_systems(
                Startup,
                (
                    (spawn_background, spawn_helicopter_visuals).in_set(StartupStage::BuildScene),
                    spawn_hud.in_set(StartupStage::BuildHud),
                ),
            )
            .add_systems(
                Update,
                (
                    (helicopter_transform_system, parallax_scroll_system).in_set(RenderSet::Layout),
                    rotor_animation_system.in_set(RenderSet::Animation),
                    hud_update_system.in_set(RenderSet::Hud),
                    exit_on_escape_system,
                ),
            );
    }
}
