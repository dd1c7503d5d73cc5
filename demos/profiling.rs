//! Example: Profile summary
//!
//! Prints the shape, columns, null counts and types of a table as JSON.
//!
//! Run with: cargo run --example profiling

use dfflow::summarize;
use polars::prelude::*;

fn main() -> anyhow::Result<()> {
    let df = df!(
        "Revenue" => [Some(1200.0), None, Some(980.5)],
        "Region" => [Some("EU"), Some("APAC"), None]
    )?;

    let summary = summarize(&df)?;

    println!("Profile Summary:");
    println!("{}", summary.to_json()?);
    println!("Total missing values: {}", summary.total_nulls());
    Ok(())
}
