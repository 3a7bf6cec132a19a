use bevy::prelude::*;

use super::DieGeometry;

/// Regular octahedron inscribed in a sphere of `radius`.
pub fn create_d8(radius: f32) -> DieGeometry {
    let vertices = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];

    let faces = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];

    DieGeometry::polyhedron(&vertices, &faces, radius)
}
