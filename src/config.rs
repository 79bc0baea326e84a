use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

use crate::core::{MatchOptions, Matcher, NUMERIC_TOLERANCE};
use crate::models::{DirectoryFilter, WeightTable, DEFAULT_WEIGHT, PRIMARY_ATTRIBUTES, PRIMARY_WEIGHT};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    #[validate(nested)]
    pub scoring: ScoringSettings,
    #[validate(nested)]
    pub matching: MatchingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub profiles_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ScoringSettings {
    #[validate(custom(function = "validate_tolerance_value"))]
    pub tolerance: f64,
    #[validate(nested)]
    pub weights: WeightsConfig,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            tolerance: NUMERIC_TOLERANCE,
            weights: WeightsConfig::default(),
        }
    }
}

/// validator passes `Copy` fields by value
fn validate_tolerance_value(tolerance: f64) -> Result<(), ValidationError> {
    validate_tolerance(&tolerance)
}

/// Tolerance must be a finite, non-negative distance
fn validate_tolerance(tolerance: &f64) -> Result<(), ValidationError> {
    if !tolerance.is_finite() || *tolerance < 0.0 {
        return Err(ValidationError::new("tolerance_not_finite_non_negative"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeightsConfig {
    #[serde(default = "default_primary_weight")]
    #[validate(range(max = 100))]
    pub primary: u32,
    #[serde(default = "default_default_weight")]
    #[validate(range(max = 100))]
    pub default: u32,
    #[serde(default = "default_primary_attributes")]
    pub primary_attributes: Vec<String>,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            primary: default_primary_weight(),
            default: default_default_weight(),
            primary_attributes: default_primary_attributes(),
        }
    }
}

fn default_primary_weight() -> u32 { PRIMARY_WEIGHT }
fn default_default_weight() -> u32 { DEFAULT_WEIGHT }
fn default_primary_attributes() -> Vec<String> {
    PRIMARY_ATTRIBUTES.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct MatchingSettings {
    pub exclude_self: bool,
    pub apply_dealbreakers: bool,
    #[validate(range(min = 1))]
    pub default_limit: Option<usize>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            exclude_self: true,
            apply_dealbreakers: true,
            default_limit: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ROOMMATE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROOMMATE__SCORING__TOLERANCE -> scoring.tolerance
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    fn finish(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid configuration: {}", e)))?;
        Ok(settings)
    }

    /// Build a matcher from the scoring section
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.scoring.weight_table(), self.scoring.tolerance)
    }

    /// Filtering options from the matching section
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            exclude_self: self.matching.exclude_self,
            apply_dealbreakers: self.matching.apply_dealbreakers,
            directory: DirectoryFilter::default(),
            limit: self.matching.default_limit,
        }
    }
}

impl ScoringSettings {
    pub fn weight_table(&self) -> WeightTable {
        WeightTable::new(
            self.weights.primary_attributes.iter().cloned(),
            self.weights.primary,
            self.weights.default,
        )
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ROOMMATE")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("scoring.weights.primary_attributes")
        .try_parsing(true)
}
