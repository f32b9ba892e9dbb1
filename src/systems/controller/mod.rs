mod keyboard;

pub use keyboard::{controls_from_keyboard, exit_on_escape_system, helicopter_keyboard_system};
