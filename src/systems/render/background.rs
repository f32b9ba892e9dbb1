use bevy::prelude::*;
use std::collections::HashMap;

use super::palette;
use super::shapes::{polygon_mesh, rect, ShapeAssets};
use crate::components::{HelicopterState, ParallaxLayer, PlayerController};
use crate::resources::{
    Building, SceneConfig, Scenery, ScreenTransform, BUILDING_DEPTH, CLOUD_DEPTH, GROUND_DEPTH,
};

// Back-to-front draw order
const CLOUD_Z: f32 = 1.0;
const BUILDING_Z: f32 = 2.0;
const GROUND_Z: f32 = 3.0;
const GRASS_Z: f32 = 4.0;
const STRIPE_Z: f32 = 4.5;
const TREE_Z: f32 = 5.0;
const PAD_Z: f32 = 6.0;

const GRASS_BLADE_SPACING: f32 = 4.0;

/// Spawns every background layer. Each scrolling element is a root entity
/// carrying a [`ParallaxLayer`], with its shapes as children.
pub fn spawn_background(
    mut commands: Commands,
    scene: Res<SceneConfig>,
    scenery: Res<Scenery>,
    transform_res: Res<ScreenTransform>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let ground_y = scene.ground_y();
    let mut shapes = ShapeAssets {
        meshes: &mut meshes,
        materials: &mut materials,
    };
    let layer = |world_x: f32, screen_y: f32, depth: f32, z: f32| {
        (
            ParallaxLayer::new(world_x, depth),
            Transform::from_translation(transform_res.to_world(Vec2::new(world_x, screen_y), z)),
            Visibility::default(),
        )
    };

    for cloud in &scenery.clouds {
        commands
            .spawn((Name::new("Cloud"), layer(cloud.x, cloud.y, CLOUD_DEPTH, CLOUD_Z)))
            .with_children(|parent| {
                parent.spawn(shapes.circle((0.0, 0.0), 18.0, palette::CLOUD, 0.0));
                parent.spawn(shapes.circle((20.0, 5.0), 22.0, palette::CLOUD, 0.01));
                parent.spawn(shapes.circle((-18.0, 8.0), 16.0, palette::CLOUD, 0.02));
            });
    }

    for building in &scenery.buildings {
        let top_y = ground_y - building.height;
        commands
            .spawn((
                Name::new("Building"),
                layer(building.x, top_y, BUILDING_DEPTH, BUILDING_Z),
            ))
            .with_children(|parent| {
                parent.spawn(rect(
                    0.0,
                    0.0,
                    building.width,
                    building.height,
                    palette::BUILDING,
                    0.0,
                ));
                parent.spawn(rect(0.0, -4.0, building.width, 4.0, palette::BUILDING_ROOF, 0.0));
                for cell in building.windows() {
                    let color = if cell.lit {
                        palette::WINDOW_LIT
                    } else {
                        palette::WINDOW_DARK
                    };
                    parent.spawn(rect(
                        cell.x,
                        cell.y,
                        Building::WINDOW_WIDTH,
                        Building::WINDOW_HEIGHT,
                        color,
                        0.1,
                    ));
                }
            });
    }

    commands.spawn((
        Name::new("Ground"),
        Sprite::from_color(palette::GROUND, Vec2::new(scene.screen_width, scene.ground_height)),
        Transform::from_translation(transform_res.to_world(
            Vec2::new(scene.screen_width / 2.0, ground_y + scene.ground_height / 2.0),
            GROUND_Z,
        )),
    ));

    // Blades repeat a handful of shapes, so share their meshes
    let mut blade_meshes: HashMap<(i32, i32), Handle<Mesh>> = HashMap::new();
    let grass_materials: Vec<_> = palette::GRASS
        .iter()
        .map(|&color| shapes.materials.add(color))
        .collect();
    for patch in &scenery.grass {
        commands
            .spawn((
                Name::new("Grass"),
                layer(patch.x, ground_y + patch.y_offset, GROUND_DEPTH, GRASS_Z),
            ))
            .with_children(|parent| {
                for (i, &height) in patch.blade_heights.iter().enumerate() {
                    let bx = i as f32 * GRASS_BLADE_SPACING - 8.0;
                    let sway = (2.0 * (patch.x * 0.1 + i as f32).sin()) as i32;
                    let mesh = blade_meshes
                        .entry((height as i32, sway))
                        .or_insert_with(|| {
                            shapes.meshes.add(polygon_mesh(&[
                                (0.0, 0.0),
                                (2.0, 0.0),
                                (1.0 + sway as f32, -height),
                            ]))
                        })
                        .clone();
                    let offset = ScreenTransform::offset(bx, 0.0);
                    parent.spawn((
                        Mesh2d(mesh),
                        MeshMaterial2d(grass_materials[i % grass_materials.len()].clone()),
                        Transform::from_xyz(offset.x, offset.y, 0.0),
                    ));
                }
            });
    }

    for &stripe_x in &scenery.stripes {
        commands
            .spawn((
                Name::new("Stripe"),
                layer(stripe_x, ground_y + 20.0, GROUND_DEPTH, STRIPE_Z),
            ))
            .with_children(|parent| {
                parent.spawn(rect(0.0, 0.0, 40.0, 10.0, palette::GROUND_STRIPE, 0.0));
            });
    }

    for tree in &scenery.trees {
        let size = tree.size;
        let trunk_w = (size / 6.0).floor().max(8.0);
        let trunk_h = (size / 2.0).floor().max(28.0);
        let crown_y = -trunk_h - 4.0;
        let r1 = (size / 3.0).floor().max(14.0);
        let r2 = (size / 4.0).floor().max(12.0);
        commands
            .spawn((Name::new("Tree"), layer(tree.x, ground_y, GROUND_DEPTH, TREE_Z)))
            .with_children(|parent| {
                parent.spawn(rect(
                    -(trunk_w / 2.0).floor(),
                    -trunk_h,
                    trunk_w,
                    trunk_h,
                    palette::TREE_TRUNK,
                    0.0,
                ));
                for (center, radius) in [
                    ((0.0, crown_y), r1),
                    ((-r1 + 6.0, crown_y + 6.0), r2 + 4.0),
                    ((r1 - 6.0, crown_y + 8.0), r2 + 2.0),
                ] {
                    parent.spawn(shapes.circle(center, radius, palette::TREE_LEAF, 0.1));
                }
            });
    }

    for (name, pad_x, color) in [
        ("Pad A", scenery.pad_a_x, palette::PAD_A),
        ("Pad B", scenery.pad_b_x, palette::PAD_B),
    ] {
        commands
            .spawn((Name::new(name), layer(pad_x, ground_y, GROUND_DEPTH, PAD_Z)))
            .with_children(|parent| {
                parent.spawn(rect(-40.0, -4.0, 80.0, 8.0, color, 0.0));
            });
    }

    info!(
        "Spawned background: {} clouds, {} buildings, {} trees, {} grass patches",
        scenery.clouds.len(),
        scenery.buildings.len(),
        scenery.trees.len(),
        scenery.grass.len()
    );
}

/// Scrolls every parallax layer opposite to the helicopter's horizontal travel.
pub fn parallax_scroll_system(
    helicopter: Query<&HelicopterState, With<PlayerController>>,
    mut layers: Query<(&ParallaxLayer, &mut Transform)>,
    transform_res: Res<ScreenTransform>,
) {
    let Ok(state) = helicopter.get_single() else {
        return;
    };
    for (layer, mut transform) in layers.iter_mut() {
        let x = transform_res.to_world_x(layer.screen_x(state.horizontal_offset));
        if transform.translation.x != x {
            transform.translation.x = x;
        }
    }
}
