pub mod background;
pub mod helicopter;
pub mod hud;

pub use background::ParallaxLayer;
pub use helicopter::{
    BladePose, FlightState, FlightStateChanged, HelicopterBody, HelicopterConfig,
    HelicopterControls, HelicopterState, MainRotorBlade, PlayerController, TailRotorBlade,
};
pub use hud::{AltitudeText, PadIndicator, RotorBarFill, RotorPercentText, StateText};
