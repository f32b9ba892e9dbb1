use bevy::{prelude::*, time::TimeUpdateStrategy};
use helimotion::{
    components::{FlightStateChanged, HelicopterConfig, HelicopterState},
    plugins::{HelicopterPlugin, StartupSequencePlugin, TransformationPlugin},
    resources::SceneConfig,
};

// Builder for creating a headless test application
pub struct TestAppBuilder {
    helicopter_config: HelicopterConfig,
    scene_config: SceneConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            helicopter_config: HelicopterConfig::default(),
            scene_config: SceneConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_helicopter(mut self, config: HelicopterConfig) -> Self {
        self.helicopter_config = config;
        self
    }

    pub fn with_scene(mut self, config: SceneConfig) -> Self {
        self.scene_config = config;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        let fps = self.scene_config.fps;

        app.add_plugins(MinimalPlugins)
            .add_plugins(StartupSequencePlugin)
            .add_plugins(TransformationPlugin::new(self.scene_config))
            .add_plugins(HelicopterPlugin::new(self.helicopter_config, fps));

        // Advance time by exactly one fixed step per frame
        let timestep = app.world().resource::<Time<Fixed>>().timestep();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(timestep));

        // Run startup so the helicopter exists
        app.update();

        TestApp { app, timestep }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub timestep: std::time::Duration,
}

#[allow(dead_code)]
impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Runs enough frames to cover `seconds` of simulated time.
    pub fn run_for(&mut self, seconds: f32) {
        let steps = (seconds / self.timestep.as_secs_f32()).ceil() as usize;
        self.run_steps(steps);
    }

    /// Runs frames one at a time, collecting every flight state change.
    pub fn run_collecting(&mut self, steps: usize) -> Vec<FlightStateChanged> {
        let mut changes = Vec::new();
        for _ in 0..steps {
            self.app.update();
            changes.extend(self.drain_transitions());
        }
        changes
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    pub fn helicopter(&mut self) -> HelicopterState {
        *self
            .query_single::<HelicopterState>()
            .expect("exactly one helicopter")
    }

    pub fn helicopter_mut(&mut self) -> Mut<HelicopterState> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut HelicopterState>();
        query.single_mut(world)
    }

    pub fn config(&self) -> HelicopterConfig {
        *self.app.world().resource::<HelicopterConfig>()
    }

    /// Drains the flight state change events emitted so far.
    pub fn drain_transitions(&mut self) -> Vec<FlightStateChanged> {
        self.app
            .world_mut()
            .resource_mut::<Events<FlightStateChanged>>()
            .drain()
            .collect()
    }

    pub fn get_resource<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }
}
