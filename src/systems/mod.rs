mod controller;
mod flight;
pub mod render;

pub use controller::{controls_from_keyboard, exit_on_escape_system, helicopter_keyboard_system};
pub use flight::{flight_state_system, FlightTransition};
pub use render::{
    helicopter_transform_system, hud_update_system, parallax_scroll_system,
    rotor_animation_system, spawn_background, spawn_helicopter_visuals, spawn_hud, HudReadout,
};
