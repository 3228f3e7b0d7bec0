//! Configuration system for Tradeoff.
//!
//! Load explorer configuration from TOML or YAML to choose filtering and
//! heuristic policies without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use tradeoff_config::ExplorerConfig;
//! use tradeoff_core::{MissingKeyPolicy, RangeRounding};
//!
//! let config = ExplorerConfig::from_toml_str(r#"
//!     missing_key_policy = "exclude"
//!     range_rounding = "raw"
//!
//!     [heuristic]
//!     tie_tolerance = 1e-6
//! "#).unwrap();
//!
//! assert_eq!(config.missing_key_policy, MissingKeyPolicy::Exclude);
//! assert_eq!(config.range_rounding, RangeRounding::Raw);
//! assert_eq!(config.heuristic.tie_tolerance, 1e-6);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use tradeoff_config::ExplorerConfig;
//!
//! let config = ExplorerConfig::load("tradeoff.toml").unwrap_or_default();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tradeoff_core::{EngineOptions, MissingKeyPolicy, RangeRounding};


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main explorer configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ExplorerConfig {
    /// Treatment of candidates lacking a bounded metric.
    #[serde(default)]
    pub missing_key_policy: MissingKeyPolicy,

    /// How maximum ranges are derived from the population.
    #[serde(default)]
    pub range_rounding: RangeRounding,

    /// Unblocking heuristic parameters.
    #[serde(default)]
    pub heuristic: HeuristicConfig,

    /// Log output configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExplorerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_missing_key_policy(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_key_policy = policy;
        self
    }

    pub fn with_range_rounding(mut self, rounding: RangeRounding) -> Self {
        self.range_rounding = rounding;
        self
    }

    pub fn with_tie_tolerance(mut self, tolerance: f64) -> Self {
        self.heuristic.tie_tolerance = tolerance;
        self
    }

    pub fn with_zero_variance_weight(mut self, weight: f64) -> Self {
        self.heuristic.zero_variance_weight = weight;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.logging.filter = Some(filter.into());
        self
    }

    /// Rejects negative or non-finite heuristic parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let h = &self.heuristic;
        if !h.tie_tolerance.is_finite() || h.tie_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tie_tolerance must be a finite non-negative number, got {}",
                h.tie_tolerance
            )));
        }
        if !h.zero_variance_weight.is_finite() || h.zero_variance_weight < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "zero_variance_weight must be a finite non-negative number, got {}",
                h.zero_variance_weight
            )));
        }
        Ok(())
    }

    /// The engine parameters this configuration selects.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions::new()
            .with_missing_key_policy(self.missing_key_policy)
            .with_range_rounding(self.range_rounding)
            .with_tie_tolerance(self.heuristic.tie_tolerance)
            .with_zero_variance_weight(self.heuristic.zero_variance_weight)
    }
}

/// Unblocking heuristic configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct HeuristicConfig {
    /// Distances within this of the minimum count as ties.
    #[serde(default = "default_tie_tolerance")]
    pub tie_tolerance: f64,

    /// Importance weight of a metric with no spread across candidates.
    #[serde(default)]
    pub zero_variance_weight: f64,
}

fn default_tie_tolerance() -> f64 {
    EngineOptions::default().tie_tolerance
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            tie_tolerance: default_tie_tolerance(),
            zero_variance_weight: 0.0,
        }
    }
}

/// Log output configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"tradeoff=debug"`. `RUST_LOG` wins when set.
    pub filter: Option<String>,
}
