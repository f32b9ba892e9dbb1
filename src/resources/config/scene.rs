use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::errors::{ensure_positive, ConfigError, Result};

/// Window, timing and layout settings of the scene.
///
/// Lengths are logical screen pixels measured from the top-left corner, y down.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub title: String,
    pub screen_width: f32,
    pub screen_height: f32,
    /// Simulation rate of the flight update (Hz).
    pub fps: f64,
    /// Height of the ground band at the bottom of the screen.
    pub ground_height: f32,
    /// Horizontal screen position of the helicopter as a fraction of the width.
    pub helicopter_x_fraction: f32,
    /// Distance between the resting skid reference and the ground line.
    pub helicopter_rest_clearance: f32,
    /// Half-span of the main rotor blade.
    pub rotor_length: f32,
    pub vsync: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "HeliMotion - Keyboard Controls".to_string(),
            screen_width: 900.0,
            screen_height: 520.0,
            fps: 60.0,
            ground_height: 120.0,
            helicopter_x_fraction: 0.35,
            helicopter_rest_clearance: 10.0,
            rotor_length: 100.0,
            vsync: true,
        }
    }
}

impl SceneConfig {
    /// Screen y of the ground line.
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Screen x at which the helicopter is drawn.
    pub fn helicopter_x(&self) -> f32 {
        (self.screen_width * self.helicopter_x_fraction).floor()
    }

    /// Screen y of the helicopter reference point for a given altitude.
    pub fn helicopter_y(&self, altitude: f32) -> f32 {
        self.ground_y() - self.helicopter_rest_clearance - altitude
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("screen_width", self.screen_width)?;
        ensure_positive("screen_height", self.screen_height)?;
        ensure_positive("ground_height", self.ground_height)?;
        ensure_positive("rotor_length", self.rotor_length)?;
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ConfigError::Validation(format!(
                "fps must be positive and finite, got {}",
                self.fps
            )));
        }
        if self.ground_height >= self.screen_height {
            return Err(ConfigError::Validation(format!(
                "ground_height ({}) must be smaller than screen_height ({})",
                self.ground_height, self.screen_height
            )));
        }
        if !(0.0..=1.0).contains(&self.helicopter_x_fraction) {
            return Err(ConfigError::Validation(format!(
                "helicopter_x_fraction must be between 0 and 1, got {}",
                self.helicopter_x_fraction
            )));
        }
        Ok(())
    }

    /// This scene if it is valid, otherwise the default layout.
    pub fn validated_or_default(&self) -> SceneConfig {
        match self.validate() {
            Ok(()) => self.clone(),
            Err(e) => {
                error!(
                    "Invalid scene configuration: {}. Defaulting to the standard layout",
                    e
                );
                SceneConfig::default()
            }
        }
    }
}
