//! Camera-related types and components
//!
//! This module contains the main camera marker, the light that follows it,
//! the orbit state, and the viewport layout derived from the window size.

use bevy::prelude::*;

/// Vertical field of view of the main camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Distance of the camera from the origin. Zoom is not offered.
pub const CAMERA_DISTANCE: f32 = 2.0;

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for the point light that is moved onto the camera every frame, so
/// the die is always lit from the viewer's side.
#[derive(Component)]
pub struct CameraLight;

/// Orbit angles of the camera around the origin.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraOrbit {
    pub yaw: f32,
    pub pitch: f32,
    /// Radians per logical pixel of mouse drag
    pub drag_sensitivity: f32,
    /// Radians per second while an orbit key is held
    pub key_speed: f32,
}

impl Default for CameraOrbit {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            drag_sensitivity: 0.01,
            key_speed: 1.0,
        }
    }
}

impl CameraOrbit {
    /// Pitch stays short of the poles so `looking_at` keeps a stable up axis.
    pub const MAX_PITCH: f32 = 1.5;

    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + delta_pitch).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
    }

    /// Camera position for the current angles. Yaw 0 / pitch 0 is `(0, 0, d)`.
    pub fn position(&self, distance: f32) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * distance
    }

    pub fn transform(&self, distance: f32) -> Transform {
        Transform::from_translation(self.position(distance)).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Size of the 3D viewport in logical pixels.
///
/// The viewport takes half of the window in each dimension, with its width
/// capped at `max_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLayout {
    pub width: f32,
    pub height: f32,
}

impl ViewportLayout {
    pub fn from_window(window_width: f32, window_height: f32, max_width: f32) -> Self {
        Self {
            width: (window_width / 2.0).min(max_width).max(1.0),
            height: (window_height / 2.0).max(1.0),
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Top-left corner that centers the viewport horizontally in the window.
    pub fn origin(&self, window_width: f32) -> Vec2 {
        Vec2::new(((window_width - self.width) / 2.0).max(0.0), 0.0)
    }
}
