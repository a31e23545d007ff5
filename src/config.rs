//! Scoring configuration
//!
//! Weights are read from a YAML file; missing fields fall back to the
//! defaults (disciplines A=1, B=0.5, C=0.2; domains A=1, B=0.5).
//! [`ScoringConfig::validate`] rejects weights outside [0, 1] before they
//! reach the collectors.

use crate::scoring::{DisciplineWeights, DomainWeights};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Weight {field} = {value} is outside [0, 1]")]
    WeightOutOfRange { field: &'static str, value: f64 },
}

/// Weights used by the discipline and domain passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub disciplines: DisciplineWeights,
    pub domains: DomainWeights,
}

impl ScoringConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&contents)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded scoring config");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a map.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else the default config file if it exists,
    /// else the built-in defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(default) if default.is_file() => Self::load(default),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/sciencefuzz/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sciencefuzz").join("config.yaml"))
    }

    /// Check every weight lies in [0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("disciplines.a", self.disciplines.a),
            ("disciplines.b", self.disciplines.b),
            ("disciplines.c", self.disciplines.c),
            ("domains.a", self.domains.a),
            ("domains.b", self.domains.b),
        ];
        for (field, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::WeightOutOfRange { field, value });
            }
        }
        Ok(())
    }
}
