//! Logger configuration files.
//!
//! A [`LoggerConfig`] is a plain JSON document; every key is optional:
//!
//! ```json
//! { "log_file": "etl.jsonl", "mode": "json", "min_level": "WARNING" }
//! ```
//!
//! Values are kept as strings here and validated by
//! [`crate::logger::Logger::from_config`], so a bad mode or level is reported
//! as a configuration error when the logger is built.

use crate::error::{Result, ResultExt as _};
use crate::logger::{DEFAULT_LOG_FILE, LogLevel, LogMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Logger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// File the logger appends to
    pub log_file: PathBuf,
    /// `text` or `json`
    pub mode: String,
    /// `DEBUG`, `INFO`, `WARNING` or `ERROR`
    pub min_level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            mode: LogMode::default().as_str().to_owned(),
            min_level: LogLevel::Info.as_str().to_owned(),
        }
    }
}

impl LoggerConfig {
    /// Parse a config from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse logger config JSON")
    }

    /// Load configuration from disk, falling back to defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No logger config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read logger config from {}", path.display()))?;

        Self::from_json(&contents)
    }

    /// Save configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize logger config")?;

        std::fs::write(path, json)
            .context(format!("Failed to write logger config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DfflowError;
    use crate::logger::Logger;
    use tempfile::tempdir;

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let config = LoggerConfig::from_json(r#"{"mode": "json"}"#)?;
        assert_eq!(config.mode, "json");
        assert_eq!(config.min_level, "INFO");
        assert_eq!(config.log_file, PathBuf::from("dfflow.log"));
        Ok(())
    }

    #[test]
    fn test_missing_file_loads_defaults() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config = LoggerConfig::load(dir.path().join("absent.json"))?;
        assert_eq!(config, LoggerConfig::default());
        Ok(())
    }

    #[test]
    fn test_save_and_load_round_trip() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("logger.json");
        let config = LoggerConfig {
            log_file: dir.path().join("run.jsonl"),
            mode: "json".to_owned(),
            min_level: "WARNING".to_owned(),
        };

        config.save(&path)?;
        let loaded = LoggerConfig::load(&path)?;
        assert_eq!(loaded, config);

        let logger = Logger::from_config(&loaded)?;
        assert_eq!(logger.mode(), LogMode::Json);
        assert_eq!(logger.min_level(), LogLevel::Warning);
        Ok(())
    }

    #[test]
    fn test_bad_values_rejected_when_logger_is_built() -> Result<()> {
        let config = LoggerConfig::from_json(r#"{"min_level": "VERBOSE"}"#)?;
        let err = Logger::from_config(&config).unwrap_err();
        assert!(matches!(err, DfflowError::Configuration(_)));
        Ok(())
    }

    #[test]
    fn test_malformed_json_is_configuration_error() {
        let err = LoggerConfig::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, DfflowError::Configuration(_)));
    }
}
