use bevy::prelude::*;

use crate::resources::{SceneConfig, ScreenTransform};

/// Plugin that sets up the screen-to-world coordinate transformation
pub struct TransformationPlugin {
    scene: SceneConfig,
}

impl TransformationPlugin {
    pub fn new(scene: SceneConfig) -> Self {
        Self { scene }
    }
}

impl Default for TransformationPlugin {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Plugin for TransformationPlugin {
    fn build(&self, app: &mut App) {
        let scene = self.scene.validated_or_default();
        app.insert_resource(ScreenTransform::from_scene(&scene))
            .insert_resource(scene);
    }
}
