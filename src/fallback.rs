use glam::Vec3;
use std::f32::consts::PI;

use crate::config::FallbackKind;
use crate::geometry::Geometry;
use crate::scene::SceneNode;

/// Magenta marks a sphere standing in for missing or corrupt geometry
pub const SPHERE_COLOR: [f32; 3] = [1.0, 0.0, 1.0];
pub const CUBE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

const SPHERE_WIDTH_SEGMENTS: u32 = 16;
const SPHERE_HEIGHT_SEGMENTS: u32 = 12;

/// Fixed primitive rendered in place of a rejected scene
#[derive(Clone, Debug, PartialEq)]
pub struct Placeholder {
    pub kind: FallbackKind,
    pub node: SceneNode,
    pub wireframe: bool,
    pub color: [f32; 3],
}

impl Placeholder {
    pub fn new(kind: FallbackKind) -> Self {
        match kind {
            FallbackKind::Sphere => Self {
                kind,
                node: SceneNode::mesh(
                    "fallback",
                    uv_sphere(1.0, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS),
                ),
                wireframe: true,
                color: SPHERE_COLOR,
            },
            FallbackKind::Cube => Self {
                kind,
                node: SceneNode::mesh("fallback", cube(1.0)),
                wireframe: false,
                color: CUBE_COLOR,
            },
        }
    }
}

/// UV sphere with a seam column, so (width + 1) * (height + 1) vertices
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);
    let vertex_count = ((width_segments + 1) * (height_segments + 1)) as usize;

    let mut position = Vec::with_capacity(vertex_count * 3);
    let mut normal = Vec::with_capacity(vertex_count * 3);
    let mut uv = Vec::with_capacity(vertex_count * 2);

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let theta = v * PI;

        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let phi = u * 2.0 * PI;

            let direction = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
            position.extend_from_slice(&(direction * radius).to_array());
            normal.extend_from_slice(&direction.normalize_or_zero().to_array());
            uv.extend_from_slice(&[u, 1.0 - v]);
        }
    }

    Geometry::new(position).with_normals(normal).with_uvs(uv)
}

/// Axis-aligned cube centred on the origin, four vertices per face
pub fn cube(size: f32) -> Geometry {
    let half = size * 0.5;
    // (face normal, u axis, v axis)
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut position = Vec::with_capacity(24 * 3);
    let mut normal = Vec::with_capacity(24 * 3);
    let mut uv = Vec::with_capacity(24 * 2);

    for (face_normal, u_axis, v_axis) in faces {
        for (u, v) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
            let corner = (face_normal + u_axis * (u * 2.0 - 1.0) + v_axis * (v * 2.0 - 1.0)) * half;
            position.extend_from_slice(&corner.to_array());
            normal.extend_from_slice(&face_normal.to_array());
            uv.extend_from_slice(&[u, v]);
        }
    }

    Geometry::new(position).with_normals(normal).with_uvs(uv)
}
