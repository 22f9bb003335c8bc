//! Centralized camera, collision and environment options with TOML preset
//! support.
//!
//! Every tuning constant the camera core depends on (speeds, smoothing
//! factors, collision heuristics, flight envelope, fog palettes, key
//! bindings) lives here. Options serialize to/from TOML so presets can be
//! stored next to a scene.

mod camera;
mod collision;
mod envelope;
mod environment;
mod keybindings;
mod locomotion;

use std::path::Path;

pub use camera::{CameraOptions, TimestepMode};
pub use collision::CollisionOptions;
pub use envelope::EnvelopeOptions;
pub use environment::{EnvironmentOptions, FogPalette};
pub use keybindings::KeybindingOptions;
pub use locomotion::{DroneOptions, WalkOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CityscapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[drone]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Projection and frame timestep parameters.
    pub camera: CameraOptions,
    /// Free-flight locomotion and look tuning.
    pub drone: DroneOptions,
    /// Ground-level locomotion and look tuning.
    pub walk: WalkOptions,
    /// Collision admission heuristics and query margins.
    pub collision: CollisionOptions,
    /// Drone flight envelope shape.
    pub envelope: EnvelopeOptions,
    /// Fog palettes and day/night state.
    pub environment: EnvironmentOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CityscapeError> {
        let content =
            std::fs::read_to_string(path).map_err(CityscapeError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| CityscapeError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Load options from `path`, falling back to defaults if the file is
    /// missing or malformed.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!(
                "could not load options from {}: {e}; using defaults",
                path.display()
            );
            Self::default()
        })
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CityscapeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CityscapeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CityscapeError::Io)?;
        }
        std::fs::write(path, content).map_err(CityscapeError::Io)
    }
}
