use bevy::prelude::*;

use super::DieGeometry;

/// Regular dodecahedron inscribed in a sphere of `radius`, each pentagonal
/// face split into three triangles.
pub fn create_d12(radius: f32) -> DieGeometry {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let inv_phi = 1.0 / phi;

    let mut vertices = Vec::with_capacity(20);

    // Cube vertices
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                vertices.push(Vec3::new(sx, sy, sz));
            }
        }
    }

    // Rectangle vertices on each axis
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            vertices.push(Vec3::new(0.0, sx * inv_phi, sy * phi));
            vertices.push(Vec3::new(sx * inv_phi, sy * phi, 0.0));
            vertices.push(Vec3::new(sx * phi, 0.0, sy * inv_phi));
        }
    }

    // Face centers lie along the cyclic permutations of (0, ±phi, ±1)
    let mut face_normals = Vec::with_capacity(12);
    for sa in [-1.0, 1.0] {
        for sb in [-1.0, 1.0] {
            face_normals.push(Vec3::new(0.0, sa * phi, sb));
            face_normals.push(Vec3::new(sb, 0.0, sa * phi));
            face_normals.push(Vec3::new(sa * phi, sb, 0.0));
        }
    }

    let faces: Vec<[u32; 3]> = face_normals
        .iter()
        .flat_map(|normal| pentagon_fan(&vertices, normal.normalize()))
        .collect();

    DieGeometry::polyhedron(&vertices, &faces, radius)
}

/// Find the five vertices of the face with `normal`, order them
/// counter-clockwise around it, and fan-triangulate.
fn pentagon_fan(vertices: &[Vec3], normal: Vec3) -> [[u32; 3]; 3] {
    let max_dot = vertices
        .iter()
        .map(|v| v.dot(normal))
        .fold(f32::MIN, f32::max);

    let mut ring: Vec<u32> = (0..vertices.len() as u32)
        .filter(|&i| (vertices[i as usize].dot(normal) - max_dot).abs() < 1e-4)
        .collect();
    debug_assert_eq!(ring.len(), 5, "dodecahedron face should have 5 vertices");

    let center = ring
        .iter()
        .map(|&i| vertices[i as usize])
        .sum::<Vec3>()
        / ring.len() as f32;
    let u = (vertices[ring[0] as usize] - center).normalize();
    let w = normal.cross(u);
    let angle = |i: u32| {
        let d = vertices[i as usize] - center;
        d.dot(w).atan2(d.dot(u))
    };
    ring.sort_by(|&a, &b| angle(a).total_cmp(&angle(b)));

    [
        [ring[0], ring[1], ring[2]],
        [ring[0], ring[2], ring[3]],
        [ring[0], ring[3], ring[4]],
    ]
}
