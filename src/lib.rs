//! # dfflow - Observability for DataFrame pipelines
//!
//! dfflow wraps simple table-cleaning scripts with just enough
//! instrumentation to see what each step did: named steps, before/after
//! shapes written to a text or JSON-lines log, and a structural profile of
//! any table.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dfflow::{LogLevel, LogMode, Logger, Pipeline, summarize};
//! use dfflow::cleaning::{drop_missing_rows, lowercase_column_names};
//! use polars::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let df = df!(
//!     "Name" => [Some("A"), None, Some("B")],
//!     "AGE" => [Some(1), Some(2), None]
//! )?;
//!
//! let logger = Logger::new("pipeline.log", LogMode::Text, LogLevel::Info);
//! let mut pipeline = Pipeline::<DataFrame>::with_logger(&logger);
//! pipeline
//!     .add_step("Drop missing rows", drop_missing_rows)
//!     .add_step("Lowercase columns", lowercase_column_names);
//!
//! let cleaned = pipeline.run(df)?;
//! println!("{}", summarize(&cleaned)?.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`table`]: the [`Table`] capability trait, implemented for Polars `DataFrame`
//! - [`logger`]: level-filtered text/JSON step logger
//! - [`step`]: [`log_step`], guarding a transformation with an input check
//! - [`cleaning`]: built-in cleaning steps
//! - [`flow`]: sequential [`Pipeline`] with per-step shape records
//! - [`profile`]: [`summarize`] a table into a [`ProfileSummary`]
//! - [`config`]: logger configuration files
//! - [`logging`]: `tracing` setup for the crate's own diagnostics
//! - [`error`]: error types

#![warn(clippy::all, rust_2018_idioms)]

pub mod cleaning;
pub mod config;
pub mod error;
pub mod flow;
pub mod logger;
pub mod logging;
pub mod profile;
pub mod step;
pub mod table;
pub mod utils;

pub use cleaning::{drop_missing_rows, drop_nulls, lowercase_column_names, lowercase_columns};
pub use error::{DfflowError, Result};
pub use flow::{Pipeline, RunReport, StepReport};
pub use logger::{LogLevel, LogMode, Logger};
pub use profile::{ProfileSummary, summarize};
pub use step::log_step;
pub use table::{Shape, Table};
