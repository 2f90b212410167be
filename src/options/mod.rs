//! Centralized chart options with TOML preset support.
//!
//! All tweakable settings (animation timing, series palette) are
//! consolidated here. Options serialize to/from TOML so host applications
//! can ship chart presets and feed them to
//! [`Charting::apply_options`](crate::registry::Charting::apply_options).

mod animation;
mod palette;

use std::path::Path;

pub use animation::AnimationOptions;
pub use palette::{Color, Palette};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ChartaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct ChartOptions {
    /// Transition timing and overshoot parameters.
    pub animation: AnimationOptions,
    /// Series color palette.
    pub palette: Palette,
}

impl ChartOptions {
    /// Generate JSON Schema describing the host-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ChartOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`ChartaError::Io`] when the file cannot be read,
    /// [`ChartaError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, ChartaError> {
        let content = std::fs::read_to_string(path).map_err(ChartaError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ChartaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`ChartaError::OptionsParse`] when serialization fails,
    /// [`ChartaError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ChartaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ChartaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ChartaError::Io)?;
        }
        std::fs::write(path, content).map_err(ChartaError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
