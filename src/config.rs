//! Runtime settings, loaded from an optional JSON file and overridden by
//! command-line flags.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Window and game settings. Missing fields take their defaults, so a
/// partial file such as `{"seed": 7}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Game tick period in milliseconds
    pub tick_interval_ms: u64,
    /// Whether the light starts orbiting
    pub light_spin: bool,
    /// Fixed RNG seed; rolls are unpredictable when absent
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "Dice".to_string(),
            tick_interval_ms: 50,
            light_spin: true,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tick_seconds(&self) -> f32 {
        self.tick_interval_ms as f32 / 1000.0
    }
}
