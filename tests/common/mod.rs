mod assertions;
mod test_app;

// Re-export
pub use assertions::{assert_controls_respected, assert_state_valid};
pub use test_app::{TestApp, TestAppBuilder};
