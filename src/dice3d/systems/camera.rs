//! Camera control systems
//!
//! This module contains the orbit controls, the light that follows the
//! camera, and the viewport that tracks the window size.

use bevy::camera::Viewport;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use bevy_material_ui::prelude::MaterialTextField;

use crate::dice3d::types::*;

/// Orbit the camera around the origin by dragging inside the viewport with the
/// left mouse button, or with A/D and the arrow keys.
#[allow(clippy::too_many_arguments)]
pub fn orbit_camera(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    settings: Res<ViewerSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    annotation_fields: Query<&MaterialTextField, With<AnnotationField>>,
    mut orbit: ResMut<CameraOrbit>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let mut delta_yaw = 0.0;
    let mut delta_pitch = 0.0;

    // Keys belong to the note field while it is focused
    let typing = annotation_fields
        .iter()
        .any(|field| field.focused && !field.disabled);
    if !typing {
        let step = orbit.key_speed * time.delta_secs();
        if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
            delta_yaw -= step;
        }
        if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
            delta_yaw += step;
        }
        if keyboard.pressed(KeyCode::ArrowUp) {
            delta_pitch += step;
        }
        if keyboard.pressed(KeyCode::ArrowDown) {
            delta_pitch -= step;
        }
    }

    if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        let over_viewport = windows.single().ok().is_some_and(|window| {
            let layout = ViewportLayout::from_window(
                window.width(),
                window.height(),
                settings.max_viewport_width,
            );
            let origin = layout.origin(window.width());
            window.cursor_position().is_some_and(|cursor| {
                cursor.x >= origin.x
                    && cursor.x <= origin.x + layout.width
                    && cursor.y >= origin.y
                    && cursor.y <= origin.y + layout.height
            })
        });
        if over_viewport {
            delta_yaw -= mouse_motion.delta.x * orbit.drag_sensitivity;
            delta_pitch += mouse_motion.delta.y * orbit.drag_sensitivity;
        }
    }

    if delta_yaw == 0.0 && delta_pitch == 0.0 {
        return;
    }

    orbit.rotate(delta_yaw, delta_pitch);
    for mut transform in camera_query.iter_mut() {
        *transform = orbit.transform(CAMERA_DISTANCE);
    }
}

/// Keep the point light on the camera.
pub fn track_camera_light(
    camera_query: Query<&Transform, (With<MainCamera>, Without<CameraLight>)>,
    mut light_query: Query<&mut Transform, (With<CameraLight>, Without<MainCamera>)>,
) {
    let Ok(camera) = camera_query.single() else {
        return;
    };
    for mut light in light_query.iter_mut() {
        light.translation = camera.translation;
    }
}

/// Size the 3D viewport to half the window (width capped) whenever the
/// window is resized. The projection's aspect ratio follows the viewport.
pub fn update_camera_viewport(
    mut resized: MessageReader<WindowResized>,
    settings: Res<ViewerSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<&mut Camera, With<MainCamera>>,
) {
    let window_changed = resized.read().count() > 0;

    let Ok(window) = windows.single() else {
        return;
    };

    for mut camera in camera_query.iter_mut() {
        if camera.viewport.is_some() && !window_changed {
            continue;
        }

        let layout =
            ViewportLayout::from_window(window.width(), window.height(), settings.max_viewport_width);
        let scale = window.scale_factor();
        let origin = layout.origin(window.width()) * scale;
        let size = Vec2::new(layout.width, layout.height) * scale;

        camera.viewport = Some(Viewport {
            physical_position: origin.as_uvec2(),
            physical_size: size.as_uvec2().max(UVec2::ONE),
            ..default()
        });
    }
}
