use bevy::prelude::*;

use super::palette;
use crate::components::{
    AltitudeText, HelicopterConfig, HelicopterState, PadIndicator, PlayerController,
    RotorBarFill, RotorPercentText, StateText,
};
use crate::resources::{SceneConfig, Scenery};

const FONT_SIZE: f32 = 16.0;
const TITLE_FONT_SIZE: f32 = 20.0;
const BAR_WIDTH: f32 = 80.0;
const BAR_HEIGHT: f32 = 14.0;
const BAR_BORDER: f32 = 1.0;
const CONTROLS: [&str; 4] = ["W - Ascend", "A - Left", "D - Right", "S - Land"];

/// Everything the HUD shows for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HudReadout {
    pub state: String,
    pub rotor_percent: String,
    pub altitude: String,
    /// Rotor speed as a fraction of the maximum.
    pub rotor_fraction: f32,
    pub bar_color: Color,
}

impl HudReadout {
    pub fn new(state: &HelicopterState, config: &HelicopterConfig) -> Self {
        let rotor_fraction = config.rotor_fraction(state.rotor_speed);
        let bar_color = if config.can_fly(state.rotor_speed) {
            palette::BAR_READY
        } else {
            palette::BAR_SPOOLING
        };
        Self {
            state: format!("State: {}", state.flight_state),
            rotor_percent: format!("{}%", (rotor_fraction * 100.0) as i32),
            altitude: format!("Altitude: {}px", state.altitude as i32),
            rotor_fraction,
            bar_color,
        }
    }
}

fn label(text: &str, size: f32, color: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn absolute(left: f32, top: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(left),
        top: Val::Px(top),
        ..default()
    }
}

pub fn spawn_hud(mut commands: Commands, scene: Res<SceneConfig>) {
    commands.spawn((
        StateText,
        absolute(12.0, 10.0),
        label("State: IDLE", FONT_SIZE, palette::TEXT),
    ));
    commands.spawn((absolute(12.0, 30.0), label("Rotor:", FONT_SIZE, palette::TEXT)));

    commands
        .spawn((
            Node {
                width: Val::Px(BAR_WIDTH),
                height: Val::Px(BAR_HEIGHT),
                border: UiRect::all(Val::Px(BAR_BORDER)),
                ..absolute(70.0, 32.0)
            },
            BackgroundColor(palette::BAR_BACKGROUND),
            BorderColor(palette::TEXT),
        ))
        .with_children(|bar| {
            bar.spawn((
                RotorBarFill {
                    max_width: BAR_WIDTH - 2.0 * BAR_BORDER,
                },
                Node {
                    width: Val::Px(0.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(palette::BAR_SPOOLING),
            ));
        });
    commands.spawn((
        RotorPercentText,
        absolute(70.0 + BAR_WIDTH + 8.0, 30.0),
        label("0%", FONT_SIZE, palette::TEXT),
    ));

    commands.spawn((
        AltitudeText,
        absolute(12.0, 52.0),
        label("Altitude: 0px", FONT_SIZE, palette::TEXT),
    ));
    commands.spawn((
        PadIndicator,
        absolute(12.0, 74.0),
        label("Over pad B - press S to land", FONT_SIZE, palette::PAD_B),
        Visibility::Hidden,
    ));

    // Controls panel in the top-right corner
    commands
        .spawn((
            Node {
                width: Val::Px(130.0),
                height: Val::Px(95.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::new(Val::Px(8.0), Val::Px(0.0), Val::Px(5.0), Val::Px(0.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..absolute(scene.screen_width - 148.0, 5.0)
            },
            BackgroundColor(palette::PANEL),
            BorderColor(palette::PANEL_BORDER),
            BorderRadius::all(Val::Px(6.0)),
        ))
        .with_children(|panel| {
            panel.spawn(label("CONTROLS", TITLE_FONT_SIZE, palette::PANEL_TITLE));
            for line in CONTROLS {
                panel.spawn(label(line, FONT_SIZE, palette::PANEL_TEXT));
            }
        });
}

fn update_text<'a>(texts: impl Iterator<Item = Mut<'a, Text>>, value: &str) {
    for mut text in texts {
        if text.0 != value {
            text.0 = value.to_string();
        }
    }
}

/// Refreshes the HUD from the player helicopter's state.
#[allow(clippy::type_complexity)]
pub fn hud_update_system(
    helicopter: Query<&HelicopterState, With<PlayerController>>,
    config: Res<HelicopterConfig>,
    scene: Res<SceneConfig>,
    scenery: Res<Scenery>,
    mut texts: ParamSet<(
        Query<&mut Text, With<StateText>>,
        Query<&mut Text, With<RotorPercentText>>,
        Query<&mut Text, With<AltitudeText>>,
    )>,
    mut bar: Query<(&RotorBarFill, &mut Node, &mut BackgroundColor)>,
    mut pad: Query<&mut Visibility, With<PadIndicator>>,
) {
    let Ok(state) = helicopter.get_single() else {
        return;
    };
    let readout = HudReadout::new(state, &config);

    update_text(texts.p0().iter_mut(), &readout.state);
    update_text(texts.p1().iter_mut(), &readout.rotor_percent);
    update_text(texts.p2().iter_mut(), &readout.altitude);

    for (fill, mut node, mut color) in bar.iter_mut() {
        node.width = Val::Px((fill.max_width * readout.rotor_fraction).floor());
        if color.0 != readout.bar_color {
            color.0 = readout.bar_color;
        }
    }

    let aligned = scenery.pad_b_aligned(state.horizontal_offset, scene.helicopter_x());
    for mut visibility in pad.iter_mut() {
        visibility.set_if_neq(if aligned {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::FlightState;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_readout_at_rest() {
        let readout = HudReadout::new(&HelicopterState::default(), &HelicopterConfig::default());
        assert_eq!(readout.state, "State: IDLE");
        assert_eq!(readout.rotor_percent, "0%");
        assert_eq!(readout.altitude, "Altitude: 0px");
        assert_eq!(readout.bar_color, palette::BAR_SPOOLING);
    }

    #[test]
    fn test_bar_turns_green_at_flight_speed() {
        let config = HelicopterConfig::default();
        let spooling = HelicopterState {
            flight_state: FlightState::SpinningUp,
            rotor_speed: 9.0,
            ..Default::default()
        };
        let ready = HelicopterState {
            rotor_speed: config.min_flight_rotor_speed,
            ..spooling
        };

        let spooling = HudReadout::new(&spooling, &config);
        assert_eq!(spooling.state, "State: SPINNING UP");
        assert_eq!(spooling.rotor_percent, "50%");
        assert_eq!(spooling.bar_color, palette::BAR_SPOOLING);
        assert_eq!(HudReadout::new(&ready, &config).bar_color, palette::BAR_READY);
    }

    #[test]
    fn test_altitude_is_truncated() {
        let state = HelicopterState {
            flight_state: FlightState::Flying,
            rotor_speed: 18.0,
            altitude: 123.9,
            ..Default::default()
        };
        let readout = HudReadout::new(&state, &HelicopterConfig::default());
        assert_eq!(readout.altitude, "Altitude: 123px");
        assert_eq!(readout.rotor_percent, "100%");
    }
}
