use bevy::prelude::*;

use super::DieGeometry;

/// Regular icosahedron inscribed in a sphere of `radius`.
pub fn create_d20(radius: f32) -> DieGeometry {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;

    // Icosahedron has 12 vertices
    let vertices = [
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, 1.0),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, -1.0),
    ];

    let faces = [
        [0, 1, 8],
        [0, 8, 4],
        [0, 4, 5],
        [0, 5, 9],
        [0, 9, 1],
        [1, 6, 8],
        [8, 6, 10],
        [8, 10, 4],
        [4, 10, 2],
        [4, 2, 5],
        [5, 2, 11],
        [5, 11, 9],
        [9, 11, 7],
        [9, 7, 1],
        [1, 7, 6],
        [3, 6, 7],
        [3, 10, 6],
        [3, 2, 10],
        [3, 11, 2],
        [3, 7, 11],
    ];

    DieGeometry::polyhedron(&vertices, &faces, radius)
}
