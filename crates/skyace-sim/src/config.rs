//! Simulation configuration.
//!
//! Every field has a default so a partial JSON file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skyace_core::constants::MAX_TIME_SCALE;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Fire a volley every `FIRE_INTERVAL_SECS`.
    pub auto_fire: bool,
    /// Spawn a target every `SPAWN_INTERVAL_SECS`.
    pub spawn_targets: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            auto_fire: true,
            spawn_targets: true,
        }
    }
}

/// Errors from loading a `SimConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_scale.is_finite() || !(0.0..=MAX_TIME_SCALE).contains(&self.time_scale) {
            return Err(ConfigError::Invalid(format!(
                "time_scale must be within 0..={MAX_TIME_SCALE}, got {}",
                self.time_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.time_scale, 1.0);
        assert!(config.auto_fire);
        assert!(config.spawn_targets);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = SimConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = SimConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_time_scale_rejected() {
        let err = SimConfig::from_json_str(r#"{ "time_scale": 9.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimConfig::load("/definitely/not/here/skyace.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
