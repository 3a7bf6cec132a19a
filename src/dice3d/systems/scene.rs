//! Scene/render systems
//!
//! `set_shape` is the only place die meshes are created or destroyed.

use bevy::prelude::*;

use crate::dice3d::meshes::DieGeometry;
use crate::dice3d::types::*;

/// Replace whatever dice are shown with `geometry`: one mesh at the origin,
/// or two side by side at `x = ±0.5` when `dual_mesh` is set. Each mesh gets
/// a wireframe overlay child that is despawned along with it.
///
/// Works through `commands`, so the scene reflects the call once commands are
/// applied. Calling it again before that despawns the pending meshes as well.
pub fn set_shape(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    scene: &mut DieScene,
    geometry: &DieGeometry,
    dual_mesh: bool,
) {
    for entity in scene.shapes.drain(..) {
        commands.entity(entity).try_despawn();
    }

    let body_mesh = meshes.add(geometry.to_mesh());
    let wireframe_mesh = meshes.add(geometry.to_wireframe_mesh());

    let slots: &[ShapeSlot] = if dual_mesh {
        &[ShapeSlot::Primary, ShapeSlot::Secondary]
    } else {
        &[ShapeSlot::Primary]
    };

    for &slot in slots {
        let entity = commands
            .spawn((
                Mesh3d(body_mesh.clone()),
                MeshMaterial3d(scene.body_material.clone()),
                Transform::from_translation(slot.translation(dual_mesh)),
                DieShape { slot },
                SpinAngles::default(),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(wireframe_mesh.clone()),
                    MeshMaterial3d(scene.wireframe_material.clone()),
                    Transform::default(),
                    WireframeOverlay,
                ));
            })
            .id();
        scene.shapes.push(entity);
    }

    scene.dual_mesh = dual_mesh;
}
