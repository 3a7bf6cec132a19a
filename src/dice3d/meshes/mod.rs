//! Die geometry
//!
//! Every die shape is first built as a plain [`DieGeometry`] (shared vertex
//! list plus triangle indices). The Bevy meshes used for rendering are
//! derived from it: a flat-shaded triangle mesh for the body and a line-list
//! mesh holding every triangle edge for the wireframe overlay.

pub mod d10;
pub mod d12;
pub mod d20;
pub mod d4;
pub mod d6;
pub mod d8;

use std::collections::BTreeSet;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy_mesh::{Indices, PrimitiveTopology};

use crate::dice3d::types::{DiceType, GeometryKind};

pub use d10::create_d10;
pub use d12::create_d12;
pub use d20::create_d20;
pub use d4::create_d4;
pub use d6::create_d6;
pub use d8::create_d8;

/// Immutable vertex/face description of a die shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DieGeometry {
    pub vertices: Vec<Vec3>,
    /// Triangles, wound counter-clockwise when seen from outside.
    pub faces: Vec<[u32; 3]>,
}

impl DieGeometry {
    /// Build a polyhedron whose vertices are projected onto a sphere of
    /// `radius`. Faces are re-wound where needed so they all face outward.
    pub fn polyhedron(vertices: &[Vec3], faces: &[[u32; 3]], radius: f32) -> Self {
        let vertices = vertices
            .iter()
            .map(|v| v.normalize() * radius)
            .collect::<Vec<_>>();
        Self::from_parts(vertices, faces)
    }

    /// Build from vertices used as given (no projection).
    pub fn from_parts(vertices: Vec<Vec3>, faces: &[[u32; 3]]) -> Self {
        let faces = faces
            .iter()
            .map(|&face| orient_outward(&vertices, face))
            .collect();
        Self { vertices, faces }
    }

    /// Distance from the center to the farthest vertex.
    pub fn radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f32::max)
    }

    /// Unique undirected edges, each as `(low, high)` vertex indices.
    pub fn edges(&self) -> Vec<(u32, u32)> {
        let mut edges = BTreeSet::new();
        for [a, b, c] in &self.faces {
            for (i, j) in [(*a, *b), (*b, *c), (*c, *a)] {
                edges.insert((i.min(j), i.max(j)));
            }
        }
        edges.into_iter().collect()
    }

    /// Outward unit normal of a face.
    pub fn face_normal(&self, face: [u32; 3]) -> Vec3 {
        let [a, b, c] = face.map(|i| self.vertices[i as usize]);
        (b - a).cross(c - a).normalize()
    }

    /// Flat-shaded triangle mesh (vertices duplicated per face).
    pub fn to_mesh(&self) -> Mesh {
        let mut positions = Vec::with_capacity(self.faces.len() * 3);
        let mut normals = Vec::with_capacity(self.faces.len() * 3);

        for &face in &self.faces {
            let n = self.face_normal(face).to_array();
            for i in face {
                positions.push(self.vertices[i as usize].to_array());
                normals.push(n);
            }
        }

        let num_vertices = positions.len();
        let indices: Vec<u32> = (0..num_vertices as u32).collect();
        let uvs: Vec<[f32; 2]> = positions.iter().map(|_| [0.5, 0.5]).collect();

        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
    }

    /// Line-list mesh with one segment per triangle edge.
    pub fn to_wireframe_mesh(&self) -> Mesh {
        let positions: Vec<[f32; 3]> = self.vertices.iter().map(|v| v.to_array()).collect();
        let indices: Vec<u32> = self
            .edges()
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect();

        Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
            .with_inserted_indices(Indices::U32(indices))
    }
}

/// Swap the winding of a triangle whose normal points toward the center.
fn orient_outward(vertices: &[Vec3], face: [u32; 3]) -> [u32; 3] {
    let [a, b, c] = face.map(|i| vertices[i as usize]);
    let normal = (b - a).cross(c - a);
    let centroid = (a + b + c) / 3.0;
    if normal.dot(centroid) < 0.0 {
        [face[0], face[2], face[1]]
    } else {
        face
    }
}

/// Build the geometry for one mesh of the given die type.
///
/// For the percentile die this is one of the two ten-sided halves, rebuilt at
/// the smaller radius rather than scaled from the D10 geometry.
pub fn create_die_geometry(die_type: DiceType) -> DieGeometry {
    let radius = die_type.radius();
    match die_type.geometry_kind() {
        GeometryKind::Tetrahedron => create_d4(radius),
        GeometryKind::Cube => create_d6(),
        GeometryKind::Octahedron => create_d8(radius),
        GeometryKind::Trapezohedron => create_d10(radius),
        GeometryKind::Dodecahedron => create_d12(radius),
        GeometryKind::Icosahedron => create_d20(radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_closed_convex(geometry: &DieGeometry, vertices: usize, faces: usize) {
        assert_eq!(geometry.vertices.len(), vertices);
        assert_eq!(geometry.faces.len(), faces);

        // Euler characteristic of a closed convex surface
        let v = geometry.vertices.len() as i64;
        let e = geometry.edges().len() as i64;
        let f = geometry.faces.len() as i64;
        assert_eq!(v - e + f, 2, "V - E + F should be 2");

        for &face in &geometry.faces {
            let [a, b, c] = face.map(|i| geometry.vertices[i as usize]);
            let centroid = (a + b + c) / 3.0;
            assert!(
                geometry.face_normal(face).dot(centroid) > 0.0,
                "face {:?} should point outward",
                face
            );
        }
    }

    #[test]
    fn test_d4_is_tetrahedron() {
        assert_closed_convex(&create_die_geometry(DiceType::D4), 4, 4);
    }

    #[test]
    fn test_d6_is_unit_box() {
        let geometry = create_die_geometry(DiceType::D6);
        assert_closed_convex(&geometry, 8, 12);
        for v in &geometry.vertices {
            assert_eq!(v.abs(), Vec3::splat(0.5));
        }
    }

    #[test]
    fn test_d8_is_octahedron() {
        assert_closed_convex(&create_die_geometry(DiceType::D8), 6, 8);
    }

    #[test]
    fn test_d10_is_trapezohedron() {
        assert_closed_convex(&create_die_geometry(DiceType::D10), 12, 20);
    }

    #[test]
    fn test_d12_is_triangulated_dodecahedron() {
        assert_closed_convex(&create_die_geometry(DiceType::D12), 20, 36);
    }

    #[test]
    fn test_d20_is_icosahedron() {
        assert_closed_convex(&create_die_geometry(DiceType::D20), 12, 20);
    }

    #[test]
    fn test_polyhedra_use_construction_radius() {
        for die in [
            DiceType::D4,
            DiceType::D8,
            DiceType::D10,
            DiceType::D12,
            DiceType::D20,
            DiceType::D100,
        ] {
            let geometry = create_die_geometry(die);
            for v in &geometry.vertices {
                assert!(
                    (v.length() - die.radius()).abs() < 1e-5,
                    "{die} vertex off the sphere"
                );
            }
        }
    }

    #[test]
    fn test_construction_is_deterministic() {
        for die in DiceType::ALL {
            assert_eq!(create_die_geometry(die), create_die_geometry(die));
        }
    }

    #[test]
    fn test_mesh_conversion_duplicates_vertices_per_face() {
        let geometry = create_die_geometry(DiceType::D20);
        let mesh = geometry.to_mesh();
        assert_eq!(mesh.count_vertices(), geometry.faces.len() * 3);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::TriangleList);
    }

    #[test]
    fn test_wireframe_has_one_segment_per_edge() {
        let geometry = create_die_geometry(DiceType::D12);
        let mesh = geometry.to_wireframe_mesh();
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineList);
        assert_eq!(
            mesh.indices().map(|i| i.len()),
            Some(geometry.edges().len() * 2)
        );
    }
}
