use bevy::prelude::*;

const fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Color::srgb(
        red as f32 / 255.0,
        green as f32 / 255.0,
        blue as f32 / 255.0,
    )
}

pub const SKY: Color = rgb(135, 206, 235);
pub const GROUND: Color = rgb(60, 120, 60);
pub const GROUND_STRIPE: Color = rgb(70, 140, 70);
pub const PAD_A: Color = rgb(200, 200, 60);
pub const PAD_B: Color = rgb(200, 100, 50);
pub const CLOUD: Color = rgb(255, 255, 255);
pub const BUILDING: Color = rgb(100, 100, 130);
pub const BUILDING_ROOF: Color = rgb(85, 85, 110);
pub const WINDOW_LIT: Color = rgb(240, 240, 190);
pub const WINDOW_DARK: Color = rgb(65, 75, 95);
pub const TREE_TRUNK: Color = rgb(94, 64, 44);
pub const TREE_LEAF: Color = rgb(50, 130, 70);
pub const GRASS: [Color; 5] = [
    rgb(45, 110, 55),
    rgb(55, 130, 60),
    rgb(65, 145, 70),
    rgb(50, 120, 55),
    rgb(40, 100, 50),
];

pub const HELI_BODY: Color = rgb(220, 40, 45);
pub const HELI_WINDOW: Color = rgb(180, 220, 230);
pub const HELI_OUTLINE: Color = rgb(50, 50, 50);
pub const ROTOR: Color = rgb(90, 90, 95);
pub const SKID: Color = rgb(70, 75, 80);

pub const TEXT: Color = rgb(15, 25, 35);
pub const BAR_BACKGROUND: Color = rgb(60, 60, 60);
pub const BAR_READY: Color = rgb(50, 200, 50);
pub const BAR_SPOOLING: Color = rgb(200, 200, 50);
pub const PANEL: Color = rgb(30, 30, 40);
pub const PANEL_BORDER: Color = rgb(100, 100, 120);
pub const PANEL_TITLE: Color = rgb(255, 255, 255);
pub const PANEL_TEXT: Color = rgb(220, 220, 220);
