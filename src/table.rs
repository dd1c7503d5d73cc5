//! The table capability boundary.
//!
//! Everything in dfflow is written against the [`Table`] trait rather than a
//! concrete frame type. The trait covers exactly what the logger, the cleaning
//! steps and the profiler need: shape, column names, null counts, type names,
//! null-row filtering, column renaming and a full textual rendering.
//!
//! [`DataFrame`] implements it out of the box:
//!
//! ```
//! use dfflow::table::{Shape, Table};
//! use polars::prelude::*;
//!
//! let df = df!("A" => [Some(1), None, Some(3)])?;
//! assert_eq!(Table::shape(&df), Shape::new(3, 1));
//! assert_eq!(df.null_counts(), vec![("A".to_owned(), 1)]);
//! # Ok::<(), PolarsError>(())
//! ```

use crate::error::{DfflowError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Row and column counts of a table.
///
/// Serializes as a two-element array `[rows, columns]` and displays as
/// `(rows, columns)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self { rows, columns }
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        (shape.rows, shape.columns)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

/// Capabilities dfflow requires from an in-memory table.
///
/// Implementors must keep the introspection methods consistent with each other:
/// one entry per column, in column order. [`ensure_table`] verifies this before
/// a table is logged, transformed or profiled.
pub trait Table {
    /// Current `(rows, columns)`.
    fn shape(&self) -> Shape;

    /// Column names in order.
    fn column_names(&self) -> Vec<String>;

    /// Missing-value count per column, in column order.
    fn null_counts(&self) -> Vec<(String, usize)>;

    /// Declared type name per column, in column order.
    fn dtype_names(&self) -> Vec<(String, String)>;

    /// Full-content textual rendering.
    fn render(&self) -> String;

    /// New table keeping only rows without any missing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying library fails to filter.
    fn drop_missing_rows(&self) -> Result<Self>
    where
        Self: Sized;

    /// New table whose columns carry `names`, positionally.
    ///
    /// # Errors
    ///
    /// Returns an error if `names` does not match the column count, or if the
    /// library rejects the names (duplicates).
    fn rename_columns(&self, names: &[String]) -> Result<Self>
    where
        Self: Sized;
}

/// Check that `table` honours the [`Table`] contract.
///
/// # Errors
///
/// Returns [`DfflowError::InvalidInput`] if the introspection methods disagree
/// about the number of columns, or report more nulls than rows.
pub fn ensure_table<T: Table + ?Sized>(table: &T) -> Result<()> {
    let shape = table.shape();
    let columns = table.column_names();

    if columns.len() != shape.columns {
        return Err(DfflowError::InvalidInput(format!(
            "table reports {} columns but lists {} names",
            shape.columns,
            columns.len()
        )));
    }

    let null_counts = table.null_counts();
    if null_counts.len() != columns.len() {
        return Err(DfflowError::InvalidInput(format!(
            "table reports null counts for {} of {} columns",
            null_counts.len(),
            columns.len()
        )));
    }
    if let Some((name, nulls)) = null_counts.iter().find(|(_, n)| *n > shape.rows) {
        return Err(DfflowError::InvalidInput(format!(
            "column '{name}' reports {nulls} nulls in {} rows",
            shape.rows
        )));
    }

    let dtypes = table.dtype_names();
    if dtypes.len() != columns.len() {
        return Err(DfflowError::InvalidInput(format!(
            "table reports types for {} of {} columns",
            dtypes.len(),
            columns.len()
        )));
    }

    Ok(())
}

impl Table for DataFrame {
    fn shape(&self) -> Shape {
        DataFrame::shape(self).into()
    }

    fn column_names(&self) -> Vec<String> {
        self.get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    fn null_counts(&self) -> Vec<(String, usize)> {
        self.get_columns()
            .iter()
            .map(|c| (c.name().to_string(), c.null_count()))
            .collect()
    }

    fn dtype_names(&self) -> Vec<(String, String)> {
        self.get_columns()
            .iter()
            .map(|c| (c.name().to_string(), c.dtype().to_string()))
            .collect()
    }

    /// Every row and column, untruncated. Polars' `Display` elides rows,
    /// columns and long strings past its preview limits.
    fn render(&self) -> String {
        let columns: Vec<Vec<String>> = self
            .get_columns()
            .iter()
            .map(|c| {
                let series = c.as_materialized_series();
                let mut cells = Vec::with_capacity(series.len() + 2);
                cells.push(c.name().to_string());
                cells.push(c.dtype().to_string());
                cells.extend((0..series.len()).map(|i| match series.get(i) {
                    Ok(value) => value
                        .get_str()
                        .map_or_else(|| value.to_string(), ToOwned::to_owned),
                    Err(_) => String::new(),
                }));
                cells
            })
            .collect();

        render_columns(&columns)
    }

    fn drop_missing_rows(&self) -> Result<Self> {
        Ok(self.clone().lazy().drop_nulls(None).collect()?)
    }

    fn rename_columns(&self, names: &[String]) -> Result<Self> {
        if names.len() != self.width() {
            return Err(DfflowError::InvalidInput(format!(
                "expected {} column names, got {}",
                self.width(),
                names.len()
            )));
        }

        let exprs: Vec<_> = self
            .get_column_names()
            .into_iter()
            .zip(names)
            .map(|(old, new)| col(old.as_str()).alias(new.as_str()))
            .collect();

        Ok(self.clone().lazy().select(exprs).collect()?)
    }
}

/// Lay out pre-formatted columns as left-aligned text.
///
/// Each column is `[name, dtype, values...]`; a dashed rule separates the two
/// header lines from the values.
fn render_columns(columns: &[Vec<String>]) -> String {
    let widths: Vec<usize> = columns
        .iter()
        .map(|cells| cells.iter().map(|c| c.chars().count()).max().unwrap_or(0))
        .collect();
    let lines = columns.first().map_or(0, Vec::len);

    let mut out = Vec::with_capacity(lines + 1);
    for line in 0..lines {
        let row = columns
            .iter()
            .zip(&widths)
            .map(|(cells, &width)| {
                format!("{:<width$}", cells.get(line).map_or("", String::as_str))
            })
            .collect::<Vec<_>>()
            .join("  ");
        out.push(row.trim_end().to_owned());

        if line == 1 {
            out.push(
                widths
                    .iter()
                    .map(|&width| "-".repeat(width))
                    .collect::<Vec<_>>()
                    .join("  "),
            );
        }
    }

    out.join("\n")
}
