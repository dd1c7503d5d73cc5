//! Guarded step functions.
//!
//! [`log_step`] turns a plain transformation into one that checks its input
//! and announces completion on stdout. The announcement is a side channel for
//! interactive scripts; it is unrelated to the records a pipeline's
//! [`crate::logger::Logger`] writes, and both fire when a guarded step runs
//! inside a logged pipeline.
//!
//! ```
//! use dfflow::cleaning::drop_missing_rows;
//! use dfflow::step::log_step;
//! use polars::prelude::*;
//!
//! let guarded = log_step("Drop Nulls", drop_missing_rows::<DataFrame>);
//! let df = df!("A" => [Some(1), None])?;
//!
//! let cleaned = guarded(&df)?; // prints "[dfflow] Drop Nulls completed"
//! assert_eq!(cleaned.height(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::Result;
use crate::table::{Table, ensure_table};

/// Wrap `transform` with an input check and a completion notice.
///
/// The returned function fails with
/// [`DfflowError::InvalidInput`](crate::error::DfflowError::InvalidInput)
/// before calling `transform` if the input fails the capability check. Errors
/// from `transform` are returned unchanged and suppress the notice.
pub fn log_step<T, F>(name: impl Into<String>, transform: F) -> impl Fn(&T) -> Result<T>
where
    T: Table,
    F: Fn(&T) -> Result<T>,
{
    let name = name.into();

    move |table: &T| {
        ensure_table(table)?;
        let result = transform(table)?;
        announce_completed(&name);
        Ok(result)
    }
}

#[expect(clippy::print_stdout)]
fn announce_completed(name: &str) {
    println!("[dfflow] {name} completed");
}
