use bevy::prelude::*;

use super::DieGeometry;

/// Edge length of the cube. The D6 is the plain box primitive rather than a
/// radius-projected polyhedron.
pub const D6_SIZE: f32 = 1.0;

pub fn create_d6() -> DieGeometry {
    let h = D6_SIZE / 2.0;

    let vertices = vec![
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];

    // Two triangles per side: -Z, +Z, -Y, +Y, -X, +X
    let faces = [
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [3, 7, 6],
        [3, 6, 2],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];

    DieGeometry::from_parts(vertices, &faces)
}
