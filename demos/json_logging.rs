//! Example: JSON-lines output
//!
//! Each call appends one compact JSON object with timestamp, level, message,
//! shape and columns.
//!
//! Run with: cargo run --example json_logging

use dfflow::{LogLevel, LogMode, Logger};
use polars::prelude::*;

fn main() -> anyhow::Result<()> {
    let df = df!(
        "Port" => ["Lisbon", "Porto"],
        "Vessels" => [12, 7]
    )?;

    let logger = Logger::new("log.jsonl", LogMode::Json, LogLevel::Info);
    logger.info("Port traffic snapshot", &df)?;

    print!("{}", std::fs::read_to_string(logger.path())?);
    Ok(())
}
