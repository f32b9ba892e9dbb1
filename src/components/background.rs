use bevy::prelude::*;

use crate::resources::Scenery;

/// A background element scrolled horizontally by the helicopter's offset.
///
/// `world_x` is the element's screen x at zero offset; `depth` scales the
/// offset, so distant layers (smaller depth) move more slowly.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub world_x: f32,
    pub depth: f32,
}

impl ParallaxLayer {
    pub fn new(world_x: f32, depth: f32) -> Self {
        Self { world_x, depth }
    }

    pub fn screen_x(&self, horizontal_offset: f32) -> f32 {
        Scenery::screen_x(self.world_x, horizontal_offset, self.depth)
    }
}
