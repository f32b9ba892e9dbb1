mod machine;

pub use machine::{flight_state_system, FlightTransition};
