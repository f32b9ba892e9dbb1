use bevy::{prelude::*, window::PresentMode};
use helimotion::{plugins::HeliMotionPlugin, resources::SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig::default();
    config.validate()?;

    let scene = &config.scene;
    let present_mode = if scene.vsync {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    };

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: scene.title.clone(),
            resolution: (scene.screen_width, scene.screen_height).into(),
            resizable: false,
            present_mode,
            ..default()
        }),
        ..default()
    }));
    app.add_plugins(HeliMotionPlugin::new(config));

    app.run();
    Ok(())
}
