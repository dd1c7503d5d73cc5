//! Example: INFO-level table logging
//!
//! Logs a small table once at INFO level to `basic_info.log` in text mode.
//!
//! Run with: cargo run --example basic_info_logging

use dfflow::{LogLevel, LogMode, Logger};
use polars::prelude::*;

fn main() -> anyhow::Result<()> {
    let df = df!(
        "Station" => ["North", "Harbour"],
        "Readings" => [41, 37]
    )?;

    let logger = Logger::new("basic_info.log", LogMode::Text, LogLevel::Info);
    logger.info("Loaded station readings", &df)?;

    println!("Wrote 1 record to {}", logger.path().display());
    Ok(())
}
