use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::errors::{ensure_positive, ensure_ratio, ConfigError, Result};

/// Tuning values for the flight state machine.
///
/// Speeds are in px/s, accelerations in px/s² and rotor quantities in rad/s.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelicopterConfig {
    /// Main rotor speed cap; flight requires the rotor to be at this speed.
    pub max_rotor_speed: f32,
    /// Rotor acceleration while spinning up.
    pub spin_accel: f32,
    /// Rotor deceleration while spinning down.
    pub spin_decel: f32,
    /// Rotor speed from which the HUD reports the rotor as ready for flight.
    pub min_flight_rotor_speed: f32,
    /// Climb speed with W held, also the landing descent speed.
    pub manual_vert_speed: f32,
    /// Horizontal travel speed with A or D held.
    pub manual_hori_speed: f32,
    /// Downward acceleration while W is released in flight.
    pub gravity: f32,
    /// Fraction of gravity cancelled by a rotor at full speed.
    pub rotor_lift_ratio: f32,
    /// Terminal sink rate without W.
    pub max_fall_speed: f32,
    /// Fraction of the landing descent cancelled while W is held.
    pub landing_lift_ratio: f32,
    /// Maximum altitude.
    pub ceiling: f32,
}

impl Default for HelicopterConfig {
    fn default() -> Self {
        Self {
            max_rotor_speed: 18.0,
            spin_accel: 8.0,
            spin_decel: 4.0,
            min_flight_rotor_speed: 12.0,
            manual_vert_speed: 150.0,
            manual_hori_speed: 220.0,
            gravity: 80.0,
            rotor_lift_ratio: 0.8,
            max_fall_speed: 100.0,
            landing_lift_ratio: 0.5,
            ceiling: 350.0,
        }
    }
}

impl HelicopterConfig {
    /// Time needed to spin the rotor from rest to full speed.
    pub fn spin_up_time(&self) -> f32 {
        self.max_rotor_speed / self.spin_accel
    }

    /// Whether the given rotor speed is enough to be shown as flight ready.
    pub fn can_fly(&self, rotor_speed: f32) -> bool {
        rotor_speed >= self.min_flight_rotor_speed
    }

    /// Rotor speed as a fraction of the maximum, in `[0, 1]`.
    pub fn rotor_fraction(&self, rotor_speed: f32) -> f32 {
        (rotor_speed / self.max_rotor_speed).clamp(0.0, 1.0)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("max_rotor_speed", self.max_rotor_speed)?;
        ensure_positive("spin_accel", self.spin_accel)?;
        ensure_positive("spin_decel", self.spin_decel)?;
        ensure_positive("min_flight_rotor_speed", self.min_flight_rotor_speed)?;
        ensure_positive("manual_vert_speed", self.manual_vert_speed)?;
        ensure_positive("manual_hori_speed", self.manual_hori_speed)?;
        ensure_positive("gravity", self.gravity)?;
        ensure_positive("max_fall_speed", self.max_fall_speed)?;
        ensure_positive("ceiling", self.ceiling)?;
        ensure_ratio("rotor_lift_ratio", self.rotor_lift_ratio)?;
        // A full landing lift would hover forever and never reach the ground
        ensure_ratio("landing_lift_ratio", self.landing_lift_ratio)?;
        if self.landing_lift_ratio >= 1.0 {
            return Err(ConfigError::Validation(
                "landing_lift_ratio must be below 1".into(),
            ));
        }

        if self.min_flight_rotor_speed > self.max_rotor_speed {
            return Err(ConfigError::Validation(format!(
                "min_flight_rotor_speed ({}) exceeds max_rotor_speed ({})",
                self.min_flight_rotor_speed, self.max_rotor_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = HelicopterConfig::default();
        assert!(config.validate().is_ok());
        assert_relative_eq!(config.spin_up_time(), 2.25);
    }

    #[test]
    fn test_rotor_thresholds() {
        let config = HelicopterConfig::default();
        assert!(!config.can_fly(11.9));
        assert!(config.can_fly(12.0));
        assert_relative_eq!(config.rotor_fraction(9.0), 0.5);
        assert_relative_eq!(config.rotor_fraction(40.0), 1.0);
    }

    #[test]
    fn test_rejects_inverted_rotor_thresholds() {
        let config = HelicopterConfig {
            min_flight_rotor_speed: 20.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_hovering_landing() {
        let config = HelicopterConfig {
            landing_lift_ratio: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: HelicopterConfig = serde_yaml::from_str("spin_accel: 6.0\n").unwrap();
        assert_eq!(config.spin_accel, 6.0);
        assert_eq!(config.max_rotor_speed, 18.0);
    }
}
