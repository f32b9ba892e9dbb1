use bevy::{
    prelude::*,
    render::{
        mesh::{Indices, PrimitiveTopology},
        render_asset::RenderAssetUsages,
    },
};

use crate::resources::ScreenTransform;

/// Axis-aligned rectangle given by its top-left corner in screen offsets (y down)
/// relative to the parent.
pub fn rect(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Color,
    z: f32,
) -> (Sprite, Transform) {
    let center = ScreenTransform::offset(x + width / 2.0, y + height / 2.0);
    (
        Sprite::from_color(color, Vec2::new(width, height)),
        Transform::from_xyz(center.x, center.y, z),
    )
}

/// Thick line between two screen offsets relative to the parent.
pub fn segment(
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Color,
    z: f32,
) -> (Sprite, Transform) {
    let a = ScreenTransform::offset(from.0, from.1);
    let b = ScreenTransform::offset(to.0, to.1);
    let delta = b - a;
    let center = (a + b) / 2.0;
    (
        Sprite::from_color(color, Vec2::new(delta.length(), width)),
        Transform::from_xyz(center.x, center.y, z)
            .with_rotation(Quat::from_rotation_z(delta.y.atan2(delta.x))),
    )
}

/// Filled convex polygon from screen offsets (y down), triangulated as a fan.
pub fn polygon_mesh(points: &[(f32, f32)]) -> Mesh {
    let positions: Vec<[f32; 3]> = points
        .iter()
        .map(|&(x, y)| {
            let p = ScreenTransform::offset(x, y);
            [p.x, p.y, 0.0]
        })
        .collect();
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];
    let uvs = vec![[0.0, 0.0]; positions.len()];

    let mut indices = Vec::with_capacity(points.len().saturating_sub(2) * 3);
    for i in 1..points.len().saturating_sub(1) {
        // Screen winding flips with the y axis, so emit counter-clockwise in world space
        indices.extend_from_slice(&[0, i as u32 + 1, i as u32]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

/// Mesh and material asset stores used while spawning the scene.
pub struct ShapeAssets<'a> {
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<ColorMaterial>,
}

impl ShapeAssets<'_> {
    pub fn circle(
        &mut self,
        center: (f32, f32),
        radius: f32,
        color: Color,
        z: f32,
    ) -> (Mesh2d, MeshMaterial2d<ColorMaterial>, Transform) {
        let offset = ScreenTransform::offset(center.0, center.1);
        (
            Mesh2d(self.meshes.add(Circle::new(radius))),
            MeshMaterial2d(self.materials.add(color)),
            Transform::from_xyz(offset.x, offset.y, z),
        )
    }

    pub fn polygon(
        &mut self,
        points: &[(f32, f32)],
        color: Color,
        z: f32,
    ) -> (Mesh2d, MeshMaterial2d<ColorMaterial>, Transform) {
        (
            Mesh2d(self.meshes.add(polygon_mesh(points))),
            MeshMaterial2d(self.materials.add(color)),
            Transform::from_xyz(0.0, 0.0, z),
        )
    }

    /// Polygon outline drawn as one segment per edge.
    pub fn outline(
        points: &[(f32, f32)],
        width: f32,
        color: Color,
        z: f32,
    ) -> Vec<(Sprite, Transform)> {
        points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(&a, &b)| segment(a, b, width, color, z))
            .collect()
    }
}
