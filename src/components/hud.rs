use bevy::prelude::*;

/// HUD line showing the flight state name.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct StateText;

/// HUD line showing the altitude.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AltitudeText;

/// Percentage next to the rotor power bar.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct RotorPercentText;

/// Filled part of the rotor power bar.
#[derive(Component, Debug, Clone, Copy)]
pub struct RotorBarFill {
    /// Width of the bar at full rotor speed (px).
    pub max_width: f32,
}

/// Indicator shown while landing pad B is below the helicopter.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PadIndicator;
