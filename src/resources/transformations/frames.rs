use bevy::prelude::*;

use crate::resources::SceneConfig;

/// Converts between screen pixels and Bevy world coordinates.
///
/// Screen: origin top-left, x right, y down.
/// World: origin at the window centre, x right, y up.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    width: f32,
    height: f32,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::from_scene(&SceneConfig::default())
    }
}

impl ScreenTransform {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_scene(scene: &SceneConfig) -> Self {
        Self::new(scene.screen_width, scene.screen_height)
    }

    pub fn to_world_x(&self, screen_x: f32) -> f32 {
        screen_x - self.width / 2.0
    }

    pub fn to_world_y(&self, screen_y: f32) -> f32 {
        self.height / 2.0 - screen_y
    }

    /// World position of a screen point at the given depth.
    pub fn to_world(&self, screen: Vec2, z: f32) -> Vec3 {
        Vec3::new(self.to_world_x(screen.x), self.to_world_y(screen.y), z)
    }

    /// Converts a screen-space displacement (y down) into a world one (y up).
    pub fn offset(dx: f32, dy: f32) -> Vec2 {
        Vec2::new(dx, -dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_map_to_world() {
        let transform = ScreenTransform::new(900.0, 520.0);
        assert_eq!(
            transform.to_world(Vec2::ZERO, 0.0),
            Vec3::new(-450.0, 260.0, 0.0)
        );
        assert_eq!(
            transform.to_world(Vec2::new(900.0, 520.0), 1.0),
            Vec3::new(450.0, -260.0, 1.0)
        );
        assert_eq!(
            transform.to_world(Vec2::new(450.0, 260.0), 0.0),
            Vec3::ZERO
        );
    }

    #[test]
    fn test_offset_flips_y() {
        assert_eq!(ScreenTransform::offset(10.0, -38.0), Vec2::new(10.0, 38.0));
    }
}
