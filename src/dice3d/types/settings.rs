//! Viewer settings types and persistence
//!
//! Settings are read from a RON file at startup. Every field has a default, so
//! a partial file only overrides what it names, and a missing or malformed
//! file falls back to the defaults entirely.

use std::path::Path;
use std::time::Duration;

use bevy::log::{info, warn};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::dice::DiceType;
use super::scene::DieStyle;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000/roll";
pub const DEFAULT_SETTINGS_FILE: &str = "diceviz.ron";

/// Viewer settings (persisted as RON).
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerSettings {
    /// Roll endpoint the form request is posted to
    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Die type checked when the viewer opens
    #[serde(default = "default_initial_die")]
    pub initial_die: DiceType,

    /// CSS color of the die body
    #[serde(default = "default_die_color")]
    pub die_color: String,

    /// CSS color of the edge overlay
    #[serde(default = "default_wireframe_color")]
    pub wireframe_color: String,

    #[serde(default = "default_opacity")]
    pub opacity: f32,

    /// Radians per second about x and y
    #[serde(default = "default_idle_spin_rate")]
    pub idle_spin_rate: f32,

    #[serde(default = "default_roll_duration_ms")]
    pub roll_duration_ms: u64,

    #[serde(default = "default_max_viewport_width")]
    pub max_viewport_width: f32,

    /// Roll in-process instead of calling the server
    #[serde(default)]
    pub offline: bool,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_initial_die() -> DiceType {
    DiceType::D20
}

fn default_die_color() -> String {
    "#fca33a".to_string()
}

fn default_wireframe_color() -> String {
    "#a88407".to_string()
}

fn default_opacity() -> f32 {
    0.75
}

fn default_idle_spin_rate() -> f32 {
    super::animation::IDLE_SPIN_RATE
}

fn default_roll_duration_ms() -> u64 {
    super::animation::ROLL_DURATION.as_millis() as u64
}

fn default_max_viewport_width() -> f32 {
    400.0
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: default_request_timeout_secs(),
            initial_die: default_initial_die(),
            die_color: default_die_color(),
            wireframe_color: default_wireframe_color(),
            opacity: default_opacity(),
            idle_spin_rate: default_idle_spin_rate(),
            roll_duration_ms: default_roll_duration_ms(),
            max_viewport_width: default_max_viewport_width(),
            offline: false,
        }
    }
}

impl ViewerSettings {
    pub fn from_ron_str(text: &str) -> Result<Self, String> {
        ron::from_str::<ViewerSettings>(text).map_err(|e| format!("Invalid settings: {}", e))
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// absent or cannot be parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_ron_str(&contents) {
                Ok(settings) => {
                    info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!("{} in {}, using defaults", e, path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_ron_string(&self) -> Result<String, String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn roll_duration(&self) -> Duration {
        Duration::from_millis(self.roll_duration_ms)
    }

    /// Die materials described by these settings. Colors that do not parse are
    /// logged and replaced by the default palette.
    pub fn die_style(&self) -> DieStyle {
        let defaults = DieStyle::default();
        let body_color = parse_color(&self.die_color).unwrap_or_else(|e| {
            warn!("die_color: {}", e);
            defaults.body_color
        });
        let wireframe_color = parse_color(&self.wireframe_color).unwrap_or_else(|e| {
            warn!("wireframe_color: {}", e);
            defaults.wireframe_color
        });

        DieStyle {
            body_color,
            opacity: self.opacity.clamp(0.0, 1.0),
            wireframe_color,
        }
    }
}

/// Parse any CSS color string ("#fca33a", "orange", "rgb(252 163 58)").
pub fn parse_color(text: &str) -> Result<Color, String> {
    let c = csscolorparser::parse(text.trim())
        .map_err(|e| format!("'{}' is not a color: {}", text, e))?;
    Ok(Color::srgba(c.r, c.g, c.b, c.a))
}
