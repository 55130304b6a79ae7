// src/config.rs

use crate::error::ConfigError;
use crate::types::{Config, GestureConfig};
use anyhow::{Context, Result};
use std::fs;

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        let config: Config =
            serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse {}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gesture.validate()?;
        if self.action.send_to_api && self.action.api_url.is_empty() {
            return Err(ConfigError::MissingApiUrl);
        }
        Ok(())
    }
}

impl GestureConfig {
    /// Construction-time validation. A detector is only ever built from
    /// a configuration that passed this check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.roll_threshold.is_finite()
            || self.roll_threshold <= 0.0
            || self.roll_threshold > 1.0
        {
            return Err(ConfigError::InvalidRollThreshold(self.roll_threshold));
        }
        if self.frames_required == 0 {
            return Err(ConfigError::InvalidFramesRequired);
        }
        if !self.debounce_seconds.is_finite() || self.debounce_seconds < 0.0 {
            return Err(ConfigError::InvalidDebounce(self.debounce_seconds));
        }
        Ok(())
    }
}
