pub mod config;
pub mod render;
pub mod state;

pub use config::HelicopterConfig;
pub use render::{BladePose, HelicopterBody, MainRotorBlade, TailRotorBlade};
pub use state::{
    FlightState, FlightStateChanged, HelicopterControls, HelicopterState, PlayerController,
};
