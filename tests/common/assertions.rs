use helimotion::components::{FlightState, HelicopterConfig, HelicopterControls, HelicopterState};
use std::f32::consts::TAU;

/// Assert that a helicopter state satisfies every invariant of the flight model
#[track_caller]
pub fn assert_state_valid(state: &HelicopterState, config: &HelicopterConfig) {
    assert!(state.rotor_speed.is_finite(), "Rotor speed is not finite");
    assert!(state.altitude.is_finite(), "Altitude is not finite");
    assert!(
        state.vertical_velocity.is_finite(),
        "Vertical velocity is not finite"
    );
    assert!(
        state.horizontal_offset.is_finite(),
        "Horizontal offset is not finite"
    );

    assert!(
        (0.0..=config.max_rotor_speed).contains(&state.rotor_speed),
        "Rotor speed {} outside [0, {}]",
        state.rotor_speed,
        config.max_rotor_speed
    );
    assert!(
        (0.0..=config.ceiling).contains(&state.altitude),
        "Altitude {} outside [0, {}]",
        state.altitude,
        config.ceiling
    );
    assert!(
        (0.0..TAU).contains(&state.rotor_angle),
        "Rotor angle {} not wrapped",
        state.rotor_angle
    );

    if state.altitude == 0.0 {
        assert!(
            state.flight_state.is_grounded(),
            "{} helicopter resting on the ground",
            state.flight_state
        );
    }

    match state.flight_state {
        FlightState::Idle => {
            assert_eq!(state.altitude, 0.0, "Idle helicopter must be on the ground");
            assert_eq!(state.rotor_speed, 0.0, "Idle rotor must be stopped");
        }
        FlightState::SpinningUp | FlightState::SpinDown => {
            assert_eq!(
                state.altitude, 0.0,
                "{} helicopter must be on the ground",
                state.flight_state
            );
        }
        FlightState::Flying | FlightState::Landing => {
            assert_eq!(
                state.rotor_speed, config.max_rotor_speed,
                "{} requires a rotor at full speed",
                state.flight_state
            );
        }
    }
}

/// Assert that a single step only moved the helicopter the way its controls allow
#[track_caller]
pub fn assert_controls_respected(
    before: &HelicopterState,
    after: &HelicopterState,
    controls: &HelicopterControls,
) {
    let moved = after.horizontal_offset - before.horizontal_offset;
    if before.flight_state != FlightState::Flying || after.flight_state == FlightState::Landing {
        assert_eq!(moved, 0.0, "Horizontal travel outside of Flying");
        return;
    }
    match controls.horizontal_direction() {
        d if d > 0.0 => assert!(moved >= 0.0, "D held but moved left by {}", moved),
        d if d < 0.0 => assert!(moved <= 0.0, "A held but moved right by {}", moved),
        _ => assert_eq!(moved, 0.0, "Moved without A or D"),
    }
}
