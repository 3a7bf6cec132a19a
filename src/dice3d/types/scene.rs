//! Scene types
//!
//! Components for the displayed die meshes and their wireframe overlays, and
//! the `DieScene` resource that tracks which meshes are currently shown.

use bevy::prelude::*;

/// Offset along x of each mesh in the dual-mesh (percentile) configuration.
pub const DUAL_MESH_OFFSET: f32 = 0.5;

/// Which mesh of the configuration an entity is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeSlot {
    /// The only mesh, or the one at `+x` in the dual-mesh configuration
    Primary,
    /// The mesh at `-x` in the dual-mesh configuration
    Secondary,
}

impl ShapeSlot {
    pub fn translation(self, dual_mesh: bool) -> Vec3 {
        match (self, dual_mesh) {
            (_, false) => Vec3::ZERO,
            (ShapeSlot::Primary, true) => Vec3::new(DUAL_MESH_OFFSET, 0.0, 0.0),
            (ShapeSlot::Secondary, true) => Vec3::new(-DUAL_MESH_OFFSET, 0.0, 0.0),
        }
    }
}

/// Component attached to each displayed die mesh
#[derive(Component, Debug, Clone, Copy)]
pub struct DieShape {
    pub slot: ShapeSlot,
}

/// Accumulated spin of a die mesh, applied as XYZ Euler angles.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinAngles {
    pub x: f32,
    pub y: f32,
}

impl SpinAngles {
    pub fn advance(&mut self, angle: f32) {
        self.x += angle;
        self.y += angle;
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// Marker for the edge overlay spawned as the only child of a die mesh.
#[derive(Component)]
pub struct WireframeOverlay;

/// Colors and opacity of the die meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieStyle {
    pub body_color: Color,
    pub opacity: f32,
    pub wireframe_color: Color,
}

impl Default for DieStyle {
    fn default() -> Self {
        Self {
            // #fca33a
            body_color: Color::srgb_u8(0xfc, 0xa3, 0x3a),
            opacity: 0.75,
            // #a88407
            wireframe_color: Color::srgb_u8(0xa8, 0x84, 0x07),
        }
    }
}

/// The die meshes currently in the scene plus the materials they share.
#[derive(Resource, Debug)]
pub struct DieScene {
    /// Root entities of the displayed meshes, primary first
    pub shapes: Vec<Entity>,
    pub dual_mesh: bool,
    pub body_material: Handle<StandardMaterial>,
    pub wireframe_material: Handle<StandardMaterial>,
}

impl DieScene {
    pub fn new(materials: &mut Assets<StandardMaterial>, style: &DieStyle) -> Self {
        let body_material = materials.add(StandardMaterial {
            base_color: style.body_color.with_alpha(style.opacity),
            alpha_mode: AlphaMode::Blend,
            // Very low shininess: broad, dim highlights
            perceptual_roughness: 0.9,
            reflectance: 0.1,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        let wireframe_material = materials.add(StandardMaterial {
            base_color: style.wireframe_color,
            unlit: true,
            ..default()
        });

        Self {
            shapes: Vec::new(),
            dual_mesh: false,
            body_material,
            wireframe_material,
        }
    }
}
