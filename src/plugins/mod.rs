mod camera;
mod helicopter;
mod render;
mod staging;
mod transformation;

pub use camera::CameraPlugin;
pub use helicopter::HelicopterPlugin;
pub use render::{RenderSet, SceneRenderPlugin};
pub use staging::{FlightSet, StartupSequencePlugin, StartupStage};
pub use transformation::TransformationPlugin;

use bevy::prelude::*;

use crate::resources::SimulationConfig;

/// Everything the HeliMotion app needs on top of Bevy's default plugins.
pub struct HeliMotionPlugin {
    config: SimulationConfig,
}

impl HeliMotionPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for HeliMotionPlugin {
    fn build(&self, app: &mut App) {
        // One resolved scene feeds both the layout and the fixed rate
        let scene = self.config.scene.validated_or_default();
        let fps = scene.fps;
        app.add_plugins((
            StartupSequencePlugin,
            TransformationPlugin::new(scene),
            HelicopterPlugin::new(self.config.helicopter, fps),
            CameraPlugin,
            SceneRenderPlugin,
        ));
    }
}
