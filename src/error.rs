//! Error types for dfflow.
//!
//! Every fallible operation in the crate returns [`Result<T>`], an alias over
//! [`DfflowError`]. Errors are surfaced to the immediate caller and never
//! swallowed or retried:
//!
//! ```
//! use dfflow::error::DfflowError;
//!
//! fn describe(err: &DfflowError) -> &'static str {
//!     match err {
//!         DfflowError::Configuration(_) => "bad logger settings",
//!         DfflowError::InvalidInput(_) => "not a usable table",
//!         DfflowError::Io(_) => "log file could not be written",
//!         _ => "other",
//!     }
//! }
//! ```
//!
//! ## Step failures
//!
//! Transformations registered on a [`crate::flow::Pipeline`] may fail with any
//! error that converts into [`DfflowError`]. Arbitrary errors can be wrapped in
//! [`DfflowError::Step`] through `anyhow`:
//!
//! ```
//! use dfflow::error::{DfflowError, Result};
//! use polars::prelude::DataFrame;
//!
//! fn reject_empty(df: &DataFrame) -> Result<DataFrame> {
//!     if df.height() == 0 {
//!         return Err(DfflowError::Step(anyhow::anyhow!("no rows left")));
//!     }
//!     Ok(df.clone())
//! }
//! ```

use polars::error::PolarsError;
use thiserror::Error;

/// Main error type for dfflow operations.
#[derive(Debug, Error)]
pub enum DfflowError {
    /// Invalid logger settings (unknown mode or level, unreadable config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A value handed in as a table failed the capability check
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors while appending to a log file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The table library rejected an operation
    #[error("Data processing error: {0}")]
    DataProcessing(String),

    /// Failure raised inside a user transformation
    #[error(transparent)]
    Step(#[from] anyhow::Error),
}

impl From<PolarsError> for DfflowError {
    fn from(err: PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for dfflow operations.
pub type Result<T> = std::result::Result<T, DfflowError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error, keeping its category.
    ///
    /// # Errors
    ///
    /// Returns the original error, converted and prefixed with `msg`.
    fn context(self, msg: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<DfflowError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let msg = msg.into();
            match e.into() {
                DfflowError::Io(io) => DfflowError::Io(std::io::Error::new(
                    io.kind(),
                    format!("{msg}: {io}"),
                )),
                DfflowError::Configuration(inner) => {
                    DfflowError::Configuration(format!("{msg}: {inner}"))
                }
                DfflowError::Serialization(inner) => {
                    DfflowError::Configuration(format!("{msg}: {inner}"))
                }
                DfflowError::InvalidInput(inner) => {
                    DfflowError::InvalidInput(format!("{msg}: {inner}"))
                }
                DfflowError::DataProcessing(inner) => {
                    DfflowError::DataProcessing(format!("{msg}: {inner}"))
                }
                DfflowError::Step(inner) => DfflowError::Step(inner.context(msg)),
            }
        })
    }
}
