use bevy::prelude::*;

use super::DieGeometry;

/// Height of the equatorial zig-zag of the ten-sided die, before projection.
const EQUATOR_OFFSET: f32 = 0.105;

/// The 20 triangles of the trapezohedron. Vertex 0 is the top apex, 1 the
/// bottom apex, and 2..=11 the equatorial ring.
const D10_FACES: [[u32; 3]; 20] = [
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 5],
    [0, 5, 6],
    [0, 6, 7],
    [0, 7, 8],
    [0, 8, 9],
    [0, 9, 10],
    [0, 10, 11],
    [0, 11, 2],
    [1, 3, 2],
    [1, 4, 3],
    [1, 5, 4],
    [1, 6, 5],
    [1, 7, 6],
    [1, 8, 7],
    [1, 9, 8],
    [1, 10, 9],
    [1, 11, 10],
    [1, 2, 11],
];

/// Pentagonal trapezohedron inscribed in a sphere of `radius`.
///
/// Used for the D10 and, rebuilt at a smaller radius, for each half of the
/// percentile pair.
pub fn create_d10(radius: f32) -> DieGeometry {
    let sides = 10;

    let mut vertices = vec![Vec3::Z, Vec3::NEG_Z];
    for i in 0..sides {
        let b = i as f32 * std::f32::consts::TAU / sides as f32;
        let z = if i % 2 == 1 {
            EQUATOR_OFFSET
        } else {
            -EQUATOR_OFFSET
        };
        vertices.push(Vec3::new(-b.cos(), -b.sin(), z));
    }

    DieGeometry::polyhedron(&vertices, &D10_FACES, radius)
}
