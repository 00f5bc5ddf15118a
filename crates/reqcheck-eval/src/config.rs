//! reqcheck configuration.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! a YAML file, and the `REQCHECK_PATTERN` environment variable. The CLI
//! applies its own flags on top.
//!
//! ```yaml
//! pattern: 'feature\d+'
//! format: text
//! thresholds:
//!   very_good: 0.85
//!   good: 0.6
//!   fair: 0.3
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use reqcheck_core::{RatingThresholds, ReqcheckError};

use crate::evaluator::Evaluator;
use crate::extraction::{Extractor, DEFAULT_PATTERN};
use crate::report::OutputFormat;

/// Environment variable that overrides the extraction pattern.
pub const PATTERN_ENV: &str = "REQCHECK_PATTERN";

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReqcheckConfig {
    /// Regular expression that identifies requirement and feature ids.
    pub pattern: String,
    /// Tier cut-offs.
    pub thresholds: RatingThresholds,
    /// Report format when none is requested explicitly.
    pub format: OutputFormat,
}

impl Default for ReqcheckConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            thresholds: RatingThresholds::default(),
            format: OutputFormat::default(),
        }
    }
}

impl ReqcheckConfig {
    /// Load a YAML config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply `REQCHECK_PATTERN` if it is set and non-empty.
    pub fn apply_env(mut self) -> Self {
        if let Ok(pattern) = std::env::var(PATTERN_ENV) {
            if !pattern.trim().is_empty() {
                tracing::debug!(%pattern, "pattern overridden from environment");
                self.pattern = pattern;
            }
        }
        self
    }

    /// Check the pattern compiles and the thresholds are ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        Extractor::new(&self.pattern)?;
        Ok(())
    }

    /// Extractor for the configured pattern.
    pub fn extractor(&self) -> Result<Extractor, ConfigError> {
        Ok(Extractor::new(&self.pattern)?)
    }

    /// Evaluator for the configured thresholds.
    pub fn evaluator(&self) -> Result<Evaluator, ConfigError> {
        Ok(Evaluator::with_thresholds(self.thresholds)?)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ReqcheckError),
}
