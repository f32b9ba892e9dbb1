use serde::{Deserialize, Serialize};
use std::path::Path;

use super::scene::SceneConfig;
use crate::components::HelicopterConfig;
use crate::resources::errors::Result;

/// Everything needed to build the app: flight tuning plus scene layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub helicopter: HelicopterConfig,
    pub scene: SceneConfig,
}

impl SimulationConfig {
    /// Loads and validates a configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: SimulationConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.helicopter.validate()?;
        self.scene.validate()
    }
}
