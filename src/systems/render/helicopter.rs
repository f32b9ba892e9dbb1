use bevy::prelude::*;

use super::palette;
use super::shapes::{rect, segment, ShapeAssets};
use crate::components::{
    HelicopterBody, HelicopterState, MainRotorBlade, PlayerController, TailRotorBlade,
};
use crate::resources::{SceneConfig, ScreenTransform};

/// Height of the fuselage; the drawing is centred half of it above the reference point.
const BODY_HEIGHT: f32 = 42.0;
const HELICOPTER_Z: f32 = 10.0;
const MAIN_ROTOR_HUB: (f32, f32) = (10.0, -38.0);
const TAIL_ROTOR_HUB: (f32, f32) = (-138.0, -12.0);

const FUSELAGE: [(f32, f32); 7] = [
    (-40.0, -18.0),
    (50.0, -18.0),
    (75.0, -10.0),
    (85.0, 2.0),
    (75.0, 14.0),
    (50.0, 22.0),
    (-40.0, 22.0),
];
const TAIL_BOOM: [(f32, f32); 4] = [(-40.0, -8.0), (-120.0, -4.0), (-120.0, 6.0), (-40.0, 12.0)];
const TAIL_FIN: [(f32, f32); 4] = [(-115.0, -4.0), (-130.0, -20.0), (-140.0, -20.0), (-125.0, 2.0)];
const WINDOWS: [[(f32, f32); 4]; 3] = [
    [(-25.0, -12.0), (-8.0, -12.0), (-10.0, 14.0), (-27.0, 14.0)],
    [(-3.0, -12.0), (16.0, -12.0), (14.0, 14.0), (-5.0, 14.0)],
    [(21.0, -12.0), (42.0, -8.0), (38.0, 12.0), (19.0, 14.0)],
];

/// Screen-space centre of the fuselage for the given altitude.
pub fn helicopter_anchor(scene: &SceneConfig, altitude: f32) -> Vec2 {
    Vec2::new(
        scene.helicopter_x(),
        scene.helicopter_y(altitude) - (BODY_HEIGHT / 2.0).floor(),
    )
}

/// Attaches the helicopter drawing to the player entity.
///
/// Parts are children of the player entity, laid out in screen offsets from
/// the fuselage centre.
pub fn spawn_helicopter_visuals(
    mut commands: Commands,
    query: Query<Entity, (With<PlayerController>, With<HelicopterState>)>,
    scene: Res<SceneConfig>,
    transform_res: Res<ScreenTransform>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Ok(entity) = query.get_single() else {
        warn!("No player helicopter found when spawning visuals!");
        return;
    };
    info!("Spawning helicopter visuals for {:?}", entity);

    let mut shapes = ShapeAssets {
        meshes: &mut meshes,
        materials: &mut materials,
    };
    let anchor = helicopter_anchor(&scene, 0.0);
    let (hub_x, hub_y) = MAIN_ROTOR_HUB;

    commands
        .entity(entity)
        .insert((
            HelicopterBody,
            Transform::from_translation(transform_res.to_world(anchor, HELICOPTER_Z)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            // Main rotor mast and blade sit behind the fuselage
            let mast = segment((hub_x, -18.0), (hub_x, hub_y), 4.0, palette::HELI_OUTLINE, 0.0);
            parent.spawn(mast);
            let hub = ScreenTransform::offset(hub_x, hub_y);
            parent.spawn((
                MainRotorBlade {
                    length: scene.rotor_length,
                },
                Sprite::from_color(palette::ROTOR, Vec2::new(2.0 * scene.rotor_length, 6.0)),
                Transform::from_xyz(hub.x, hub.y, 0.1),
            ));
            parent.spawn(shapes.circle(MAIN_ROTOR_HUB, 5.0, palette::ROTOR, 0.2));

            // Tail
            parent.spawn(shapes.polygon(&TAIL_BOOM, palette::HELI_BODY, 0.3));
            for edge in ShapeAssets::outline(&TAIL_BOOM, 2.0, palette::HELI_OUTLINE, 0.31) {
                parent.spawn(edge);
            }
            parent.spawn(shapes.polygon(&TAIL_FIN, palette::HELI_BODY, 0.3));
            for edge in ShapeAssets::outline(&TAIL_FIN, 2.0, palette::HELI_OUTLINE, 0.31) {
                parent.spawn(edge);
            }
            let tail_hub = ScreenTransform::offset(TAIL_ROTOR_HUB.0, TAIL_ROTOR_HUB.1);
            parent.spawn((
                TailRotorBlade,
                Sprite::from_color(palette::ROTOR, Vec2::new(0.0, 4.0)),
                Transform::from_xyz(tail_hub.x, tail_hub.y, 0.35),
            ));

            // Fuselage and cockpit
            parent.spawn(shapes.polygon(&FUSELAGE, palette::HELI_BODY, 0.4));
            for edge in ShapeAssets::outline(&FUSELAGE, 2.0, palette::HELI_OUTLINE, 0.41) {
                parent.spawn(edge);
            }
            for window in WINDOWS.iter() {
                parent.spawn(shapes.polygon(window, palette::HELI_WINDOW, 0.5));
                for edge in ShapeAssets::outline(window, 2.0, palette::HELI_OUTLINE, 0.51) {
                    parent.spawn(edge);
                }
            }

            // Skids with upturned ends and struts
            let skid_y = 38.0;
            let (skid_left, skid_right) = (-60.0, 70.0);
            let skid_parts = [
                ((skid_left, skid_y), (skid_right - 15.0, skid_y), 5.0),
                ((skid_right - 15.0, skid_y), (skid_right - 5.0, skid_y - 4.0), 5.0),
                ((skid_right - 5.0, skid_y - 4.0), (skid_right, skid_y - 10.0), 5.0),
                ((skid_left, skid_y), (skid_left - 8.0, skid_y - 6.0), 5.0),
                ((30.0, 22.0), (35.0, skid_y), 4.0),
                ((-25.0, 22.0), (-30.0, skid_y), 4.0),
            ];
            for (from, to, width) in skid_parts {
                parent.spawn(segment(from, to, width, palette::SKID, 0.2));
            }
        });
}

/// Places the helicopter drawing at the height given by its altitude.
pub fn helicopter_transform_system(
    mut query: Query<(&HelicopterState, &mut Transform), With<HelicopterBody>>,
    scene: Res<SceneConfig>,
    transform_res: Res<ScreenTransform>,
) {
    for (state, mut transform) in query.iter_mut() {
        let anchor = helicopter_anchor(&scene, state.altitude);
        let z = transform.translation.z;
        transform.translation = transform_res.to_world(anchor, z);
    }
}

/// Turns the rotor angle of each helicopter into blade poses.
pub fn rotor_animation_system(
    helicopters: Query<(&HelicopterState, &Children)>,
    mut main_blades: Query<
        (&MainRotorBlade, &mut Sprite, &mut Transform),
        Without<TailRotorBlade>,
    >,
    mut tail_blades: Query<
        (&mut Sprite, &mut Transform),
        (With<TailRotorBlade>, Without<MainRotorBlade>),
    >,
) {
    for (state, children) in helicopters.iter() {
        for &child in children.iter() {
            if let Ok((blade, mut sprite, mut transform)) = main_blades.get_mut(child) {
                let pose = blade.pose(state.rotor_angle);
                sprite.custom_size = Some(Vec2::new(pose.length, 6.0));
                transform.rotation = Quat::from_rotation_z(pose.rotation);
            } else if let Ok((mut sprite, mut transform)) = tail_blades.get_mut(child) {
                let pose = TailRotorBlade::pose(state.rotor_angle);
                sprite.custom_size = Some(Vec2::new(pose.length, 4.0));
                transform.rotation = Quat::from_rotation_z(pose.rotation);
            }
        }
    }
}
