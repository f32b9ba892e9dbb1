use bevy::prelude::*;

use crate::components::{HelicopterControls, PlayerController};

pub const ASCEND_KEY: KeyCode = KeyCode::KeyW;
pub const LEFT_KEY: KeyCode = KeyCode::KeyA;
pub const RIGHT_KEY: KeyCode = KeyCode::KeyD;
pub const LAND_KEY: KeyCode = KeyCode::KeyS;
pub const EXIT_KEY: KeyCode = KeyCode::Escape;

/// Builds the frame's input snapshot from the keys currently held.
pub fn controls_from_keyboard(keyboard: &ButtonInput<KeyCode>) -> HelicopterControls {
    HelicopterControls {
        ascend: keyboard.pressed(ASCEND_KEY),
        left: keyboard.pressed(LEFT_KEY),
        right: keyboard.pressed(RIGHT_KEY),
        land: keyboard.pressed(LAND_KEY),
    }
}

/// System writing the keyboard state into the player helicopter's controls.
///
/// Runs once per fixed step, before the flight update, so the state machine
/// only ever sees a complete snapshot.
pub fn helicopter_keyboard_system(
    mut query: Query<&mut HelicopterControls, With<PlayerController>>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    if let Ok(mut controls) = query.get_single_mut() {
        let snapshot = controls_from_keyboard(&keyboard);
        // Avoid tripping change detection on idle frames
        controls.set_if_neq(snapshot);
    }
}

/// System requesting app exit when ESC is pressed.
pub fn exit_on_escape_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(EXIT_KEY) {
        info!("Escape pressed, exiting");
        exit.send(AppExit::Success);
    }
}
