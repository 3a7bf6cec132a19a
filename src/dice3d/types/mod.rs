//! Type definitions for the dice viewer
//!
//! This module is organized into submodules:
//! - `dice` - Die types and the current selection
//! - `scene` - Displayed die meshes and their shared materials
//! - `camera` - Camera, light, orbit state, and viewport layout
//! - `animation` - The roll animation state machine
//! - `events` - Selection and roll messages
//! - `settings` - Viewer settings and persistence
//! - `ui` - UI marker components

pub mod animation;
pub mod camera;
pub mod dice;
pub mod events;
pub mod scene;
pub mod settings;
pub mod ui;

// Re-export all public types for convenient access
pub use animation::*;
pub use camera::*;
pub use dice::*;
pub use events::*;
pub use scene::*;
pub use settings::*;
pub use ui::*;
