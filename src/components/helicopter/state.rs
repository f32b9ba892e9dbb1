use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Discrete flight phase of the helicopter. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightState {
    /// On the ground, rotor stopped.
    #[default]
    Idle,
    /// On the ground, rotor accelerating towards full speed.
    SpinningUp,
    /// Airborne with full control.
    Flying,
    /// Committed descent towards the ground.
    Landing,
    /// On the ground, rotor decelerating.
    SpinDown,
}

impl FlightState {
    /// Label shown on the HUD.
    pub fn label(&self) -> &'static str {
        match self {
            FlightState::Idle => "IDLE",
            FlightState::SpinningUp => "SPINNING UP",
            FlightState::Flying => "FLYING",
            FlightState::Landing => "LANDING",
            FlightState::SpinDown => "SPIN DOWN",
        }
    }

    /// States in which the helicopter is allowed to rest on the ground.
    pub fn is_grounded(&self) -> bool {
        matches!(
            self,
            FlightState::Idle | FlightState::SpinningUp | FlightState::SpinDown
        )
    }
}

impl std::fmt::Display for FlightState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete kinematic and rotor state of the helicopter.
///
/// Altitude, velocities and offsets are in screen pixels, rotor quantities in
/// radians. Positive `vertical_velocity` is upwards.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HelicopterState {
    pub flight_state: FlightState,
    /// Main rotor angular speed (rad/s), within `[0, max_rotor_speed]`.
    pub rotor_speed: f32,
    /// Main rotor blade angle (rad), wrapped to `[0, 2π)`.
    pub rotor_angle: f32,
    /// Height above the ground line (px), never negative.
    pub altitude: f32,
    /// Vertical speed (px/s), positive up.
    pub vertical_velocity: f32,
    /// Accumulated horizontal travel (px). Unbounded; drives the parallax scroll.
    pub horizontal_offset: f32,
    /// Seconds since the last state transition.
    pub time_in_state: f32,
}

impl Default for HelicopterState {
    fn default() -> Self {
        Self {
            flight_state: FlightState::Idle,
            rotor_speed: 0.0,
            rotor_angle: 0.0,
            altitude: 0.0,
            vertical_velocity: 0.0,
            horizontal_offset: 0.0,
            time_in_state: 0.0,
        }
    }
}

impl HelicopterState {
    /// Moves to `next`, resetting the in-state timer. Returns the previous state.
    pub(crate) fn enter(&mut self, next: FlightState) -> FlightState {
        let previous = self.flight_state;
        self.flight_state = next;
        self.time_in_state = 0.0;
        previous
    }
}

/// Input snapshot for one frame, built from the keyboard before the flight step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelicopterControls {
    /// W: spin up, climb.
    pub ascend: bool,
    /// A: move left.
    pub left: bool,
    /// D: move right.
    pub right: bool,
    /// S: begin landing.
    pub land: bool,
}

impl HelicopterControls {
    /// Horizontal direction requested by A/D: -1, 0 or 1. Both held cancel out.
    pub fn horizontal_direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Marks the helicopter driven by the local keyboard.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerController;

/// Emitted whenever the flight state machine changes state.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightStateChanged {
    pub entity: Entity,
    pub from: FlightState,
    pub to: FlightState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle_on_ground() {
        let state = HelicopterState::default();
        assert_eq!(state.flight_state, FlightState::Idle);
        assert_eq!(state.rotor_speed, 0.0);
        assert_eq!(state.altitude, 0.0);
        assert_eq!(state.horizontal_offset, 0.0);
    }

    #[test]
    fn test_enter_resets_timer() {
        let mut state = HelicopterState {
            time_in_state: 3.5,
            ..Default::default()
        };
        let previous = state.enter(FlightState::SpinningUp);
        assert_eq!(previous, FlightState::Idle);
        assert_eq!(state.flight_state, FlightState::SpinningUp);
        assert_eq!(state.time_in_state, 0.0);
    }

    #[test]
    fn test_horizontal_direction() {
        let mut controls = HelicopterControls::default();
        assert_eq!(controls.horizontal_direction(), 0.0);
        controls.left = true;
        assert_eq!(controls.horizontal_direction(), -1.0);
        controls.right = true;
        assert_eq!(controls.horizontal_direction(), 0.0);
        controls.left = false;
        assert_eq!(controls.horizontal_direction(), 1.0);
    }

    #[test]
    fn test_grounded_states() {
        assert!(FlightState::Idle.is_grounded());
        assert!(FlightState::SpinningUp.is_grounded());
        assert!(FlightState::SpinDown.is_grounded());
        assert!(!FlightState::Flying.is_grounded());
        assert!(!FlightState::Landing.is_grounded());
        assert_eq!(FlightState::SpinDown.to_string(), "SPIN DOWN");
    }
}
