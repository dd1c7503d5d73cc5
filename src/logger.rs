//! Table-aware step logger.
//!
//! A [`Logger`] appends one record per call to a file, either as a
//! human-readable block (with the full table rendering) or as a JSON line.
//! Records below the configured minimum level are dropped before any I/O
//! happens, so a filtered call never creates the file.
//!
//! ```no_run
//! use dfflow::logger::{LogLevel, LogMode, Logger};
//! use polars::prelude::*;
//!
//! let logger = Logger::new("pipeline.jsonl", LogMode::Json, LogLevel::Info);
//! let df = df!("A" => [1, 2], "B" => [3, 4])?;
//!
//! logger.debug("not written", &df)?;
//! logger.info("loaded input", &df)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The file is opened, appended to and closed on every call; nothing is
//! buffered between calls.

use crate::config::LoggerConfig;
use crate::error::{DfflowError, Result};
use crate::table::{Shape, Table, ensure_table};
use crate::utils::current_timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "dfflow.log";

const RECORD_SEPARATOR_WIDTH: usize = 80;

/// Severity of a log record.
///
/// Ordered by weight: DEBUG (10) < INFO (20) < WARNING (30) < ERROR (40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// All levels, lowest weight first.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    pub fn weight(self) -> u8 {
        match self {
            Self::Debug => 10,
            Self::Info => 20,
            Self::Warning => 30,
            Self::Error => 40,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = DfflowError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| DfflowError::Configuration(format!("Invalid log level: {s}")))
    }
}

/// Output format of the log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    /// Multi-line blocks including the rendered table
    #[default]
    Text,
    /// One compact JSON object per line
    Json,
}

impl LogMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogMode {
    type Err = DfflowError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(DfflowError::Configuration(
                "mode must be 'text' or 'json'".to_owned(),
            )),
        }
    }
}

/// A JSON-mode record. Text mode renders the same fields plus the table.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    pub shape: Shape,
    pub columns: Vec<String>,
}

/// Level-filtered, append-only table logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    path: PathBuf,
    mode: LogMode,
    min_level: LogLevel,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE, LogMode::Text, LogLevel::Info)
    }
}

impl Logger {
    pub fn new(path: impl Into<PathBuf>, mode: LogMode, min_level: LogLevel) -> Self {
        Self {
            path: path.into(),
            mode,
            min_level,
        }
    }

    /// Build a logger from textual settings, e.g. `("json", "WARNING")`.
    ///
    /// # Errors
    ///
    /// Returns [`DfflowError::Configuration`] if `mode` is not `text`/`json` or
    /// `min_level` is not one of `DEBUG`, `INFO`, `WARNING`, `ERROR`.
    pub fn from_names(path: impl Into<PathBuf>, mode: &str, min_level: &str) -> Result<Self> {
        let mode: LogMode = mode.parse()?;
        let min_level: LogLevel = min_level.parse()?;
        Ok(Self::new(path, mode, min_level))
    }

    /// Build a logger from a loaded [`LoggerConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`Logger::from_names`].
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        Self::from_names(config.log_file.clone(), &config.mode, &config.min_level)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> LogMode {
        self.mode
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether a record at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.weight() >= self.min_level.weight()
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn debug<T: Table + ?Sized>(&self, message: &str, table: &T) -> Result<()> {
        self.log(LogLevel::Debug, message, table)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn info<T: Table + ?Sized>(&self, message: &str, table: &T) -> Result<()> {
        self.log(LogLevel::Info, message, table)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn warning<T: Table + ?Sized>(&self, message: &str, table: &T) -> Result<()> {
        self.log(LogLevel::Warning, message, table)
    }

    /// # Errors
    ///
    /// See [`Logger::log`].
    pub fn error<T: Table + ?Sized>(&self, message: &str, table: &T) -> Result<()> {
        self.log(LogLevel::Error, message, table)
    }

    /// Append one record for `table` if `level` passes the filter.
    ///
    /// # Errors
    ///
    /// - [`DfflowError::InvalidInput`] if `table` fails the capability check
    ///   (checked before filtering).
    /// - [`DfflowError::Io`] if the file cannot be opened or written.
    pub fn log<T: Table + ?Sized>(&self, level: LogLevel, message: &str, table: &T) -> Result<()> {
        ensure_table(table)?;

        if !self.enabled(level) {
            return Ok(());
        }

        let record = LogRecord {
            timestamp: current_timestamp(),
            level,
            message: message.to_owned(),
            shape: table.shape(),
            columns: table.column_names(),
        };

        let payload = match self.mode {
            LogMode::Json => {
                let mut line = serde_json::to_string(&record)?;
                line.push('\n');
                line
            }
            LogMode::Text => render_text_record(&record, &table.render()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(payload.as_bytes())?;

        tracing::debug!(
            path = %self.path.display(),
            record_level = %level,
            shape = %record.shape,
            "Appended log record"
        );

        Ok(())
    }
}

fn render_text_record(record: &LogRecord, rendered_table: &str) -> String {
    format!(
        "{sep}\nTimestamp : {ts}\nLevel     : {level}\nMessage   : {msg}\nShape     : {shape}\nDataFrame :\n{rendered_table}\n\n",
        sep = "=".repeat(RECORD_SEPARATOR_WIDTH),
        ts = record.timestamp,
        level = record.level,
        msg = record.message,
        shape = record.shape,
    )
}
