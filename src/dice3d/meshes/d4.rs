use bevy::prelude::*;

use super::DieGeometry;

/// Regular tetrahedron inscribed in a sphere of `radius`.
pub fn create_d4(radius: f32) -> DieGeometry {
    let vertices = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ];

    let faces = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];

    DieGeometry::polyhedron(&vertices, &faces, radius)
}
