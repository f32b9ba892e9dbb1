mod background;
mod helicopter;
mod hud;
pub mod palette;
pub mod shapes;

pub use background::{parallax_scroll_system, spawn_background};
pub use helicopter::{
    helicopter_anchor, helicopter_transform_system, rotor_animation_system,
    spawn_helicopter_visuals,
};
pub use hud::{hud_update_system, spawn_hud, HudReadout};
