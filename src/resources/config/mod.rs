pub mod scene;
pub mod simulation;

pub use scene::SceneConfig;
pub use simulation::SimulationConfig;
