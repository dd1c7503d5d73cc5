//! Built-in cleaning steps.
//!
//! [`drop_missing_rows`] and [`lowercase_column_names`] are plain
//! transformations. [`drop_nulls`] and [`lowercase_columns`] are the same
//! transformations pre-wrapped with [`log_step`], for scripts that want the
//! completion notice.

use crate::error::Result;
use crate::step::log_step;
use crate::table::Table;

/// Keep only rows with no missing value in any column. The input is untouched.
///
/// # Errors
///
/// Returns an error if the table library fails to filter.
pub fn drop_missing_rows<T: Table>(table: &T) -> Result<T> {
    table.drop_missing_rows()
}

/// Copy of `table` with every column name lowercased, order unchanged.
///
/// Names that collide after lowercasing are passed to the table library as-is;
/// for `DataFrame` this is rejected as a duplicate column.
///
/// # Errors
///
/// Returns an error if the table library rejects the new names.
pub fn lowercase_column_names<T: Table>(table: &T) -> Result<T> {
    let names: Vec<String> = table
        .column_names()
        .iter()
        .map(|name| name.to_lowercase())
        .collect();
    table.rename_columns(&names)
}

/// [`drop_missing_rows`] guarded as the "Drop Nulls" step.
///
/// # Errors
///
/// See [`log_step`] and [`drop_missing_rows`].
pub fn drop_nulls<T: Table>(table: &T) -> Result<T> {
    log_step("Drop Nulls", drop_missing_rows::<T>)(table)
}

/// [`lowercase_column_names`] guarded as the "Lowercase Columns" step.
///
/// # Errors
///
/// See [`log_step`] and [`lowercase_column_names`].
pub fn lowercase_columns<T: Table>(table: &T) -> Result<T> {
    log_step("Lowercase Columns", lowercase_column_names::<T>)(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DfflowError;
    use crate::table::Shape;
    use crate::table::tests::MalformedTable;
    use polars::prelude::*;

    fn total_nulls(df: &DataFrame) -> usize {
        df.null_counts().iter().map(|(_, n)| n).sum()
    }

    #[test]
    fn test_drop_nulls() -> anyhow::Result<()> {
        let df = df!("A" => [Some(1), None])?;
        let result = super::drop_nulls(&df)?;
        assert_eq!(total_nulls(&result), 0);
        assert_eq!(result.height(), 1);
        Ok(())
    }

    #[test]
    fn test_drop_missing_rows_any_column() -> anyhow::Result<()> {
        let df = df!(
            "Name" => [Some("A"), None, Some("B"), Some("C")],
            "AGE" => [Some(1), Some(2), None, Some(4)]
        )?;
        let original = df.clone();

        let result = drop_missing_rows(&df)?;

        assert_eq!(Table::shape(&result), Shape::new(2, 2));
        assert_eq!(total_nulls(&result), 0);
        assert!(df.equals_missing(&original), "input must not be mutated");
        Ok(())
    }

    #[test]
    fn test_drop_missing_rows_without_nulls_keeps_shape() -> anyhow::Result<()> {
        let df = df!("A" => [1, 2, 3], "B" => ["x", "y", "z"])?;
        let result = drop_missing_rows(&df)?;
        assert_eq!(Table::shape(&result), Table::shape(&df));
        Ok(())
    }

    #[test]
    fn test_lowercase_columns() -> anyhow::Result<()> {
        let df = df!("Name" => [1], "AGE" => [2])?;
        let result = lowercase_columns(&df)?;
        assert_eq!(result.column_names(), vec!["name", "age"]);
        assert_eq!(df.column_names(), vec!["Name", "AGE"]);
        Ok(())
    }

    #[test]
    fn test_lowercase_is_idempotent() -> anyhow::Result<()> {
        let df = df!("MiXeD" => [1, 2], "already" => [3, 4], "ÜBER" => [5, 6])?;

        let once = lowercase_column_names(&df)?;
        let twice = lowercase_column_names(&once)?;

        assert_eq!(once.column_names(), vec!["mixed", "already", "über"]);
        assert_eq!(once.column_names(), twice.column_names());
        assert!(once.equals(&twice));
        Ok(())
    }

    #[test]
    fn test_lowercase_collision_is_not_deduplicated() -> anyhow::Result<()> {
        let df = df!("Name" => [1], "NAME" => [2])?;
        let err = lowercase_column_names(&df).unwrap_err();
        assert!(matches!(err, DfflowError::DataProcessing(_)), "got {err:?}");
        Ok(())
    }

    #[test]
    fn test_guarded_steps_reject_invalid_tables() {
        assert!(matches!(
            super::drop_nulls(&MalformedTable),
            Err(DfflowError::InvalidInput(_))
        ));
        assert!(matches!(
            lowercase_columns(&MalformedTable),
            Err(DfflowError::InvalidInput(_))
        ));
    }
}
