//! Session configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sketchsnap_core::{Color, ConfigError, EdgeInsets};
use sketchsnap_document::DEFAULT_ARTBOARD_COLOR;
use sketchsnap_layout::{Axis, StackLayout};

pub const CONFIG_FILE_NAME: &str = "sketchsnap.config.json";

/// How a session arranges its snapshots on the artboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Gap between vertically adjacent snapshots
    pub vertical_padding: f64,
    /// Gap between horizontally adjacent snapshots
    pub horizontal_padding: f64,
    /// Margin between the snapshots and the artboard edges
    pub insets: EdgeInsets,
    pub artboard_color: Color,
    /// Axis along which snapshot batches are stacked
    pub primary_axis: Axis,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            vertical_padding: 20.0,
            horizontal_padding: 20.0,
            insets: EdgeInsets::uniform(60.0),
            artboard_color: DEFAULT_ARTBOARD_COLOR,
            primary_axis: Axis::Horizontal,
        }
    }
}

impl SessionConfig {
    /// Load `sketchsnap.config.json` from `dir`, or the defaults when it does not exist.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no session config, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded session config");
        Ok(config)
    }

    /// Parse a config from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The stack layout described by this config.
    pub fn stack_layout(&self) -> StackLayout {
        StackLayout {
            vertical_padding: self.vertical_padding,
            horizontal_padding: self.horizontal_padding,
            primary: self.primary_axis,
        }
    }
}
