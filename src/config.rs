//! Configuration management for valuefmt
//!
//! This module handles loading, validation, and management of the
//! configuration from YAML files. The file location can be overridden with
//! the `VALUEFMT_CONFIG` environment variable.

use crate::error::{Result, ValueFmtError};
use crate::formatter::{CaseMapping, MAX_FRACTION_DIGITS};
use crate::logging::parse_log_level;
use crate::record::Person;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod defaults;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "VALUEFMT_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Formatting rules
    pub formatting: FormattingConfig,

    /// Sample inputs and records run by the binary
    pub samples: SamplesConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Optional console-specific level; falls back to `level`
    pub console_level: Option<String>,

    /// Optional file-specific level; falls back to `level`
    pub file_level: Option<String>,

    /// Path to log file; empty disables file logging
    pub file: String,

    /// Number of rotated files to keep
    pub backup_count: u32,

    /// Whether to log to console
    pub console_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

/// Formatting rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// Digits after the decimal point for numeric values
    pub fraction_digits: usize,

    /// Uppercase mapping for text values (unicode or ascii)
    pub case_mapping: CaseMapping,
}

/// Sample inputs run by the binary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplesConfig {
    /// Values to format; anything other than strings and numbers is rejected.
    /// Kept as YAML values so `.nan` and `.inf` stay numeric.
    pub inputs: Vec<serde_yaml::Value>,

    /// People to extend with a profession
    pub people: Vec<Person>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from `VALUEFMT_CONFIG` or the default locations
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        let default_paths = ["valuefmt.yaml", "/etc/valuefmt/config.yaml"];

        for path in &default_paths {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        // Fall back to default configuration
        Ok(Config::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if parse_log_level(&self.logging.level).is_err() {
            return Err(ValueFmtError::validation(
                "logging.level",
                "Must be one of TRACE, DEBUG, INFO, WARN, ERROR",
            ));
        }

        for (field, level) in [
            ("logging.console_level", &self.logging.console_level),
            ("logging.file_level", &self.logging.file_level),
        ] {
            if let Some(level) = level
                && parse_log_level(level).is_err()
            {
                return Err(ValueFmtError::validation(
                    field,
                    "Must be one of TRACE, DEBUG, INFO, WARN, ERROR",
                ));
            }
        }

        if !self.logging.file.is_empty() && self.logging.backup_count == 0 {
            return Err(ValueFmtError::validation(
                "logging.backup_count",
                "Must be greater than 0",
            ));
        }

        if self.formatting.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ValueFmtError::Validation {
                field: "formatting.fraction_digits".to_string(),
                message: format!("Must be at most {}", MAX_FRACTION_DIGITS),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "INFO");
        assert_eq!(config.formatting.fraction_digits, 2);
        assert_eq!(config.formatting.case_mapping, CaseMapping::Unicode);
        assert_eq!(config.samples.inputs.len(), 2);
        assert_eq!(config.samples.people, vec![Person::new("Shamim", 28)]);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.logging.level = "LOUD".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.logging.file_level = Some("nope".to_string());
        assert!(config.validate().is_err());

        config = Config::default();
        config.formatting.fraction_digits = MAX_FRACTION_DIGITS + 1;
        assert!(config.validate().is_err());

        config = Config::default();
        config.logging.backup_count = 0;
        assert!(config.validate().is_err());
        config.logging.file.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "formatting:\n  case_mapping: ascii\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.formatting.case_mapping, CaseMapping::Ascii);
        assert_eq!(config.formatting.fraction_digits, 2);
        assert_eq!(config.logging.level, "INFO");
    }

    #[test]
    fn test_samples_from_yaml() {
        let yaml = "samples:\n  inputs: [hello, 42, true]\n  people:\n    - name: Ada\n      age: 36\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.samples.inputs[0].as_str(), Some("hello"));
        assert_eq!(config.samples.inputs[1].as_i64(), Some(42));
        assert_eq!(config.samples.inputs[2].as_bool(), Some(true));
        assert_eq!(config.samples.people, vec![Person::new("Ada", 36)]);
    }

    #[test]
    fn test_non_finite_samples_stay_numbers() {
        let yaml = "samples:\n  inputs: [.nan, .inf, -.inf]\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.samples.inputs.iter().all(serde_yaml::Value::is_f64));
        assert!(config.samples.inputs[0].as_f64().is_some_and(f64::is_nan));
        assert_eq!(config.samples.inputs[1].as_f64(), Some(f64::INFINITY));
        assert_eq!(config.samples.inputs[2].as_f64(), Some(f64::NEG_INFINITY));
    }
}
