//! Example: DEBUG records and the minimum level
//!
//! With `min_level` at DEBUG both records below are written; switch it to
//! INFO and the first one disappears.
//!
//! Run with: cargo run --example debug_logging

use dfflow::Logger;
use polars::prelude::*;

fn main() -> anyhow::Result<()> {
    let df = df!("x" => [1, 2, 3], "y" => [10, 20, 30])?;

    let logger = Logger::from_names("debug.log", "text", "DEBUG")?;

    logger.debug("Raw table loaded", &df)?;
    logger.info("Table ready for processing", &df)?;

    println!("DEBUG logging completed ({})", logger.path().display());
    Ok(())
}
