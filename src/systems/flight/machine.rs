use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::components::{
    FlightState, FlightStateChanged, HelicopterConfig, HelicopterControls, HelicopterState,
};

/// Relative distance from a rotor bound below which the rotor snaps onto it.
const ROTOR_SNAP: f32 = 1e-5;

/// A single state change produced by [`HelicopterState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightTransition {
    pub from: FlightState,
    pub to: FlightState,
}

/// System advancing every helicopter by one fixed step.
///
/// Reads the per-frame [`HelicopterControls`] snapshot, runs the state machine
/// and reports each transition as a [`FlightStateChanged`] event.
pub fn flight_state_system(
    mut query: Query<(Entity, &mut HelicopterState, &HelicopterControls)>,
    config: Res<HelicopterConfig>,
    time: Res<Time>,
    mut changes: EventWriter<FlightStateChanged>,
) {
    let dt = time.delta_secs();

    for (entity, mut state, controls) in query.iter_mut() {
        for FlightTransition { from, to } in state.update(controls, &config, dt) {
            info!("Helicopter {:?}: {} -> {}", entity, from, to);
            changes.send(FlightStateChanged { entity, from, to });
        }
        debug!(
            "state: {}, rotor: {:.2}, altitude: {:.1}, vs: {:.1}, offset: {:.1}",
            state.flight_state,
            state.rotor_speed,
            state.altitude,
            state.vertical_velocity,
            state.horizontal_offset
        );
    }
}

impl HelicopterState {
    /// Advances the state machine and its physics by `dt` seconds.
    ///
    /// Input-driven transitions are resolved first, then the physics of the
    /// resulting state is integrated (explicit Euler) and threshold transitions
    /// are checked. A zero, negative or non-finite `dt` leaves the state
    /// untouched.
    ///
    /// # Arguments
    /// * `controls` - Keys held during this frame.
    /// * `config` - Tuning values.
    /// * `dt` - Elapsed time in seconds.
    pub fn update(
        &mut self,
        controls: &HelicopterControls,
        config: &HelicopterConfig,
        dt: f32,
    ) -> Vec<FlightTransition> {
        let mut transitions = Vec::new();
        if !(dt.is_finite() && dt > 0.0) {
            return transitions;
        }
        self.time_in_state += dt;

        // S beats W in flight; W restarts a rotor that is still winding down.
        let requested = match self.flight_state {
            FlightState::Idle if controls.ascend => Some(FlightState::SpinningUp),
            FlightState::SpinningUp if !controls.ascend => Some(FlightState::SpinDown),
            FlightState::Flying if controls.land => Some(FlightState::Landing),
            FlightState::SpinDown if controls.ascend => Some(FlightState::SpinningUp),
            _ => None,
        };
        if let Some(next) = requested {
            self.transition(next, &mut transitions);
        }

        match self.flight_state {
            FlightState::Idle => {
                self.vertical_velocity = 0.0;
            }
            FlightState::SpinningUp => {
                self.spin_up(config, dt);
                if self.rotor_speed >= config.max_rotor_speed {
                    self.transition(FlightState::Flying, &mut transitions);
                    // Lift off within the same step so Flying never sits on the ground
                    self.vertical_velocity = config.manual_vert_speed;
                    self.integrate_altitude(config, dt);
                }
            }
            FlightState::Flying => {
                self.fly(controls, config, dt);
                if self.altitude <= 0.0 {
                    self.transition(FlightState::SpinDown, &mut transitions);
                }
            }
            FlightState::Landing => {
                let lift = if controls.ascend {
                    config.landing_lift_ratio
                } else {
                    0.0
                };
                self.vertical_velocity = -config.manual_vert_speed * (1.0 - lift);
                self.integrate_altitude(config, dt);
                if self.altitude <= 0.0 {
                    self.transition(FlightState::SpinDown, &mut transitions);
                }
            }
            FlightState::SpinDown => {
                self.spin_down(config, dt);
                if self.rotor_speed <= 0.0 {
                    self.transition(FlightState::Idle, &mut transitions);
                }
            }
        }

        self.rotor_speed = self.rotor_speed.clamp(0.0, config.max_rotor_speed);
        self.altitude = self.altitude.clamp(0.0, config.ceiling);
        self.rotor_angle = (self.rotor_angle + self.rotor_speed * dt).rem_euclid(TAU);

        transitions
    }

    fn transition(&mut self, next: FlightState, transitions: &mut Vec<FlightTransition>) {
        let from = self.enter(next);
        transitions.push(FlightTransition { from, to: next });
    }

    fn spin_up(&mut self, config: &HelicopterConfig, dt: f32) {
        let max = config.max_rotor_speed;
        self.rotor_speed = (self.rotor_speed + config.spin_accel * dt).min(max);
        if max - self.rotor_speed <= max * ROTOR_SNAP {
            self.rotor_speed = max;
        }
        self.vertical_velocity = 0.0;
    }

    fn spin_down(&mut self, config: &HelicopterConfig, dt: f32) {
        self.rotor_speed = (self.rotor_speed - config.spin_decel * dt).max(0.0);
        if self.rotor_speed <= config.max_rotor_speed * ROTOR_SNAP {
            self.rotor_speed = 0.0;
        }
        self.vertical_velocity = 0.0;
    }

    fn fly(&mut self, controls: &HelicopterControls, config: &HelicopterConfig, dt: f32) {
        if controls.ascend {
            self.vertical_velocity = config.manual_vert_speed;
        } else {
            // The spinning rotor cancels part of gravity
            let rotor_lift = config.rotor_fraction(self.rotor_speed) * config.rotor_lift_ratio;
            let effective_gravity = config.gravity * (1.0 - rotor_lift);
            self.vertical_velocity = (self.vertical_velocity - effective_gravity * dt)
                .max(-config.max_fall_speed);
        }

        self.horizontal_offset += controls.horizontal_direction() * config.manual_hori_speed * dt;
        self.integrate_altitude(config, dt);
    }

    fn integrate_altitude(&mut self, config: &HelicopterConfig, dt: f32) {
        self.altitude += self.vertical_velocity * dt;
        if self.altitude <= 0.0 {
            self.altitude = 0.0;
            self.vertical_velocity = 0.0;
        } else if self.altitude >= config.ceiling {
            self.altitude = config.ceiling;
            self.vertical_velocity = self.vertical_velocity.min(0.0);
        }
    }
}
