//! Integration tests for the full logging workflow
//!
//! These tests drive the public API end to end: a logged cleaning pipeline,
//! the guarded steps, profiling and the capability check.

use dfflow::cleaning::{drop_missing_rows, drop_nulls, lowercase_column_names, lowercase_columns};
use dfflow::config::LoggerConfig;
use dfflow::logger::LogRecord;
use dfflow::{DfflowError, LogLevel, LogMode, Logger, Pipeline, Shape, Table, log_step, summarize};
use polars::prelude::*;
use tempfile::TempDir;

/// A table-like value whose shape and column listing disagree.
struct NotATable;

impl Table for NotATable {
    fn shape(&self) -> Shape {
        Shape::new(3, 1)
    }

    fn column_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn null_counts(&self) -> Vec<(String, usize)> {
        Vec::new()
    }

    fn dtype_names(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn render(&self) -> String {
        "[1, 2, 3]".to_owned()
    }

    fn drop_missing_rows(&self) -> dfflow::Result<Self> {
        Ok(Self)
    }

    fn rename_columns(&self, _names: &[String]) -> dfflow::Result<Self> {
        Ok(Self)
    }
}

fn messy_df() -> DataFrame {
    df!(
        "Name" => [Some("A"), None, Some("B")],
        "AGE" => [Some(1), Some(2), None]
    )
    .unwrap()
}

fn read_records(path: &std::path::Path) -> Vec<LogRecord> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_logged_cleaning_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("clean.jsonl");
    let logger = Logger::new(&log_path, LogMode::Json, LogLevel::Info);

    let mut pipeline = Pipeline::<DataFrame>::with_logger(&logger);
    pipeline
        .add_step("drop_missing_rows", drop_missing_rows::<DataFrame>)
        .add_step("lowercase_column_names", lowercase_column_names::<DataFrame>);

    let result = pipeline.run(messy_df()).unwrap();

    assert_eq!(result.height(), 1, "Only one complete row survives");
    assert_eq!(result.column_names(), vec!["name", "age"]);

    let records = read_records(&log_path);
    assert_eq!(records.len(), 2, "One INFO record per step");
    for (record, step) in records.iter().zip(["drop_missing_rows", "lowercase_column_names"]) {
        assert_eq!(record.level, LogLevel::Info);
        assert!(record.message.contains(step));
        assert!(record.message.contains(" → "));
        assert_eq!(record.timestamp.len(), 19);
    }
}

#[test]
fn test_guarded_steps_in_logged_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("guarded.log");
    let logger = Logger::new(&log_path, LogMode::Text, LogLevel::Debug);

    let mut pipeline = Pipeline::<DataFrame>::with_logger(&logger);
    pipeline
        .add_step("Drop Nulls", drop_nulls::<DataFrame>)
        .add_step("Lowercase Columns", lowercase_columns::<DataFrame>);

    let (result, report) = pipeline.run_with_report(messy_df()).unwrap();

    assert_eq!(Table::shape(&result), Shape::new(1, 2));
    assert_eq!(report.input, Shape::new(3, 2));
    assert_eq!(report.steps.len(), 2);
    assert!(report.summary().starts_with("Pipeline completed: 2 steps, (3, 2) → (1, 2)"));

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(content.matches(&"=".repeat(80)).count(), 2);
    assert!(content.contains("Step 'Drop Nulls' completed | (3, 2) → (1, 2)"));
    assert!(content.contains("Step 'Lowercase Columns' completed | (1, 2) → (1, 2)"));
}

#[test]
fn test_invalid_table_rejected_everywhere() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("never.log");
    let logger = Logger::new(&log_path, LogMode::Text, LogLevel::Info);

    let err = logger.info("Invalid input", &NotATable).unwrap_err();
    assert!(matches!(err, DfflowError::InvalidInput(_)));

    let guarded = log_step("Identity", |t: &NotATable| t.rename_columns(&t.column_names()));
    assert!(matches!(guarded(&NotATable), Err(DfflowError::InvalidInput(_))));

    let pipeline = Pipeline::<NotATable>::with_logger(&logger);
    assert!(matches!(pipeline.run(NotATable), Err(DfflowError::InvalidInput(_))));

    assert!(matches!(summarize(&NotATable), Err(DfflowError::InvalidInput(_))));
    assert!(!log_path.exists());
}

#[test]
fn test_profile_after_cleaning() {
    let df = df!("A" => [Some(1), None]).unwrap();

    let summary = summarize(&df).unwrap();
    assert_eq!(summary.shape, Shape::new(2, 1));
    assert_eq!(summary.columns, vec!["A"]);
    assert_eq!(summary.null_count("A"), Some(1));

    let cleaned = summarize(&drop_missing_rows(&df).unwrap()).unwrap();
    assert_eq!(cleaned.shape, Shape::new(1, 1));
    assert_eq!(cleaned.total_nulls(), 0);
}

#[test]
fn test_logger_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logger.json");
    let log_path = temp_dir.path().join("configured.jsonl");
    std::fs::write(
        &config_path,
        serde_json::json!({
            "log_file": log_path,
            "mode": "json",
            "min_level": "WARNING",
        })
        .to_string(),
    )
    .unwrap();

    let logger = Logger::from_config(&LoggerConfig::load(&config_path).unwrap()).unwrap();
    let df = messy_df();

    logger.info("filtered", &df).unwrap();
    assert!(!log_path.exists(), "INFO is below WARNING");

    logger.warning("kept", &df).unwrap();
    logger.error("kept", &df).unwrap();

    let levels: Vec<LogLevel> = read_records(&log_path).iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![LogLevel::Warning, LogLevel::Error]);
}
