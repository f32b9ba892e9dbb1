use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildUtilities,
    BuildHelicopter,
    BuildCameras,
    BuildScene,
    BuildHud,
}

/// Fixed-step flight stages: the input snapshot is taken before the state machine runs.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Update,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::BuildUtilities,
                StartupStage::BuildHelicopter,
                StartupStage::BuildCameras,
                StartupStage::BuildScene,
                StartupStage::BuildHud,
            )
                .chain(),
        )
        .configure_sets(FixedUpdate, (FlightSet::Input, FlightSet::Update).chain());
    }
}
