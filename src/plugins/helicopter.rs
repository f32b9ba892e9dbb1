use bevy::prelude::*;

use crate::components::{
    FlightStateChanged, HelicopterConfig, HelicopterControls, HelicopterState, PlayerController,
};
use crate::plugins::{FlightSet, StartupStage};
use crate::systems::{flight_state_system, helicopter_keyboard_system};

const DEFAULT_FPS: f64 = 60.0;

/// Spawns the player helicopter and runs its flight state machine on a fixed step.
pub struct HelicopterPlugin {
    config: HelicopterConfig,
    fps: f64,
}

impl HelicopterPlugin {
    pub fn new(config: HelicopterConfig, fps: f64) -> Self {
        HelicopterPlugin { config, fps }
    }

    fn setup_helicopter(mut commands: Commands) {
        let entity = commands
            .spawn((
                HelicopterState::default(),
                HelicopterControls::default(),
                PlayerController,
                Name::new("Helicopter"),
            ))
            .id();
        info!("Spawned helicopter {:?}", entity);
    }
}

impl Default for HelicopterPlugin {
    fn default() -> Self {
        Self::new(HelicopterConfig::default(), DEFAULT_FPS)
    }
}

impl Plugin for HelicopterPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config,
            Err(e) => {
                error!("Invalid helicopter configuration: {}. Using defaults", e);
                HelicopterConfig::default()
            }
        };

        app.insert_resource(config)
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<FlightStateChanged>()
            .add_systems(
                Startup,
                Self::setup_helicopter.in_set(StartupStage::BuildHelicopter),
            )
            .add_systems(
                FixedUpdate,
                (
                    helicopter_keyboard_system.in_set(FlightSet::Input),
                    flight_state_system.in_set(FlightSet::Update),
                ),
            );

        let fps = if self.fps.is_finite() && self.fps > 0.0 {
            self.fps
        } else {
            error!("Invalid simulation rate {} Hz. Using {} Hz", self.fps, DEFAULT_FPS);
            DEFAULT_FPS
        };
        app.insert_resource(Time::<Fixed>::from_hz(fps));
    }
}
