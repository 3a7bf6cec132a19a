//! Tests for die geometry construction

use std::collections::HashMap;

use bevy::prelude::*;
use diceviz::dice3d::meshes::{create_d10, create_die_geometry, DieGeometry};
use diceviz::dice3d::types::DiceType;

/// Every edge of a closed surface borders exactly two triangles.
fn assert_watertight(geometry: &DieGeometry) {
    let mut edge_uses: HashMap<(u32, u32), usize> = HashMap::new();
    for [a, b, c] in &geometry.faces {
        for (i, j) in [(*a, *b), (*b, *c), (*c, *a)] {
            *edge_uses.entry((i.min(j), i.max(j))).or_default() += 1;
        }
    }
    for (edge, uses) in edge_uses {
        assert_eq!(uses, 2, "edge {:?} used {} times", edge, uses);
    }
}

#[test]
fn test_decahedron_has_twelve_vertices_and_twenty_faces() {
    let geometry = create_die_geometry(DiceType::D10);
    assert_eq!(geometry.vertices.len(), 12);
    assert_eq!(geometry.faces.len(), 20);
    for face in &geometry.faces {
        for &i in face {
            assert!(i <= 11, "index {} out of range", i);
        }
    }
}

#[test]
fn test_all_dice_are_watertight() {
    for die in DiceType::ALL {
        assert_watertight(&create_die_geometry(die));
    }
}

#[test]
fn test_edge_counts() {
    let expected = [
        (DiceType::D4, 6),
        // 12 box edges plus one diagonal per square face
        (DiceType::D6, 18),
        (DiceType::D8, 12),
        (DiceType::D10, 30),
        // 30 pentagon edges plus two diagonals per pentagon
        (DiceType::D12, 54),
        (DiceType::D20, 30),
        (DiceType::D100, 30),
    ];
    for (die, edges) in expected {
        assert_eq!(create_die_geometry(die).edges().len(), edges, "{die}");
    }
}

#[test]
fn test_percentile_half_is_smaller_ten_sided_die() {
    let d10 = create_die_geometry(DiceType::D10);
    let d100 = create_die_geometry(DiceType::D100);

    assert_eq!(d10.faces, d100.faces);
    assert!((d10.radius() - 0.75).abs() < 1e-5);
    assert!((d100.radius() - 0.4).abs() < 1e-5);
    for (a, b) in d10.vertices.iter().zip(&d100.vertices) {
        assert!((a.normalize() - b.normalize()).length() < 1e-5);
    }
}

#[test]
fn test_decahedron_apexes_on_z_axis() {
    let geometry = create_d10(1.0);
    assert!((geometry.vertices[0] - Vec3::Z).length() < 1e-6);
    assert!((geometry.vertices[1] + Vec3::Z).length() < 1e-6);
}

#[test]
fn test_unit_box_is_not_projected() {
    let geometry = create_die_geometry(DiceType::D6);
    let expected = Vec3::splat(0.5).length();
    for v in &geometry.vertices {
        assert!((v.length() - expected).abs() < 1e-6);
    }
}

#[test]
fn test_meshes_have_normals_for_every_vertex() {
    for die in DiceType::ALL {
        let mesh = create_die_geometry(die).to_mesh();
        let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION).map(|a| a.len());
        let normals = mesh.attribute(Mesh::ATTRIBUTE_NORMAL).map(|a| a.len());
        assert!(positions.is_some());
        assert_eq!(positions, normals, "{die}");
    }
}
