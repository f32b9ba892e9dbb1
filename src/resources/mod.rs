pub mod config;
pub mod errors;
mod scenery;
mod transformations;

pub use config::{SceneConfig, SimulationConfig};
pub use errors::ConfigError;
pub use scenery::{
    Building, Cloud, GrassPatch, Scenery, Tree, WindowCell, BUILDING_DEPTH, CLOUD_DEPTH,
    GROUND_DEPTH,
};
pub use transformations::ScreenTransform;
