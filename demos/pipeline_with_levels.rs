//! Example: Logged cleaning pipeline
//!
//! Runs the two built-in guarded steps over a table with gaps. Each step
//! prints a completion notice and appends one INFO record to `pipeline.log`.
//! The minimum level can be overridden with an optional JSON config passed as
//! the first argument. Diagnostics also go to the platform data directory
//! (`~/.local/share/dfflow/logs` on Linux).
//!
//! Run with: cargo run --example pipeline_with_levels [logger.json]

use dfflow::cleaning::{drop_nulls, lowercase_columns};
use dfflow::config::LoggerConfig;
use dfflow::{Logger, Pipeline};
use polars::prelude::*;

fn main() -> anyhow::Result<()> {
    dfflow::logging::init(Some(&dfflow::logging::default_log_dir()?))?;

    let config = match std::env::args().nth(1) {
        Some(path) => LoggerConfig::load(path)?,
        None => LoggerConfig {
            log_file: "pipeline.log".into(),
            ..LoggerConfig::default()
        },
    };
    let logger = Logger::from_config(&config)?;

    let df = df!(
        "Sensor" => [Some("t-01"), None, Some("t-03"), Some("t-04")],
        "CELSIUS" => [Some(21.5), Some(19.0), None, Some(22.1)]
    )?;

    let mut pipeline = Pipeline::<DataFrame>::with_logger(&logger);
    pipeline
        .add_step("Drop Nulls", drop_nulls::<DataFrame>)
        .add_step("Lowercase Columns", lowercase_columns::<DataFrame>);

    let (cleaned, report) = pipeline.run_with_report(df)?;

    println!("{}", report.summary());
    println!("{cleaned}");
    Ok(())
}
