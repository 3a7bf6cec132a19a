//! Systems module for dice3d
//!
//! This module contains all the Bevy systems for the dice viewer, organized
//! into submodules by functionality:
//!
//! - `setup`: Cameras, light, shared materials, and UI
//! - `scene`: Building the displayed die meshes
//! - `selection`: Applying the selected die type
//! - `animation`: Idle and roll spin
//! - `camera`: Orbit controls, camera light, and viewport
//! - `input`: Buttons, note field, and keyboard shortcuts

mod animation;
mod camera;
mod input;
mod scene;
mod selection;
mod setup;

// Re-export all public systems
pub use animation::{advance_roll_animation, spin_dice};
pub use camera::{orbit_camera, track_camera_light, update_camera_viewport};
pub use input::{
    ensure_buttons_have_interaction, handle_annotation_submit, handle_keyboard_shortcuts, handle_roll_button_clicks,
    handle_selector_clicks,
};
pub use scene::set_shape;
pub use selection::{apply_selection_changes, load_selection, update_selector_styles};
pub use setup::{setup_scene, setup_ui};
