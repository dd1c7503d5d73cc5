//! Sequential, shape-tracking pipelines.
//!
//! A [`Pipeline`] holds named steps and runs them in insertion order, feeding
//! each step the previous step's output. When a [`Logger`] is attached, every
//! completed step produces one INFO record carrying the new table:
//!
//! ```text
//! Step 'drop_missing' completed | (3, 2) → (1, 2)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use dfflow::cleaning::{drop_missing_rows, lowercase_column_names};
//! use dfflow::flow::Pipeline;
//! use dfflow::logger::Logger;
//! use polars::prelude::*;
//!
//! let logger = Logger::default();
//! let mut pipeline = Pipeline::<DataFrame>::with_logger(&logger);
//! pipeline
//!     .add_step("drop_missing", drop_missing_rows)
//!     .add_step("lowercase", lowercase_column_names);
//!
//! let df = df!("Name" => [Some("A"), None], "AGE" => [Some(1), Some(2)])?;
//! let cleaned = pipeline.run(df)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Steps are opaque: any error they return reaches the caller unchanged, the
//! remaining steps are not run and nothing is rolled back.

use crate::error::Result;
use crate::logger::Logger;
use crate::table::{Shape, Table, ensure_table};
use std::fmt;
use std::time::{Duration, Instant};

/// Boxed transformation stored by a [`Pipeline`].
pub(crate) type StepFn<'a, T> = Box<dyn Fn(&T) -> Result<T> + 'a>;

/// A named transformation.
pub(crate) struct Step<'a, T> {
    name: String,
    transform: StepFn<'a, T>,
}

impl<'a, T> Step<'a, T> {
    pub(crate) fn new<F>(name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&T) -> Result<T> + 'a,
    {
        Self {
            name: name.into(),
            transform: Box::new(transform),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Run the transformation on `table`.
    ///
    /// # Errors
    ///
    /// Whatever the transformation returns.
    pub(crate) fn apply(&self, table: &T) -> Result<T> {
        (self.transform)(table)
    }
}

impl<T> fmt::Debug for Step<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Shape transition of one executed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub name: String,
    pub before: Shape,
    pub after: Shape,
}

impl StepReport {
    /// `"(3, 2) → (1, 2)"`
    pub fn transition(&self) -> String {
        format!("{} → {}", self.before, self.after)
    }
}

/// Report generated after a pipeline run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Shape of the input table
    pub input: Shape,

    /// Shape of the returned table
    pub output: Shape,

    /// One entry per step, in execution order
    pub steps: Vec<StepReport>,

    /// Time taken for execution
    pub duration: Duration,
}

impl RunReport {
    /// Create a summary message
    pub fn summary(&self) -> String {
        format!(
            "Pipeline completed: {} steps, {} → {}, {:.2}s",
            self.steps.len(),
            self.input,
            self.output,
            self.duration.as_secs_f64()
        )
    }
}

/// Ordered list of named steps with an optional, borrowed logger.
pub struct Pipeline<'a, T> {
    steps: Vec<Step<'a, T>>,
    logger: Option<&'a Logger>,
}

impl<T> Default for Pipeline<'_, T> {
    fn default() -> Self {
        Self {
            steps: Vec::new(),
            logger: None,
        }
    }
}

impl<T> fmt::Debug for Pipeline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.steps)
            .field("logger", &self.logger)
            .finish()
    }
}

impl<'a, T: Table> Pipeline<'a, T> {
    /// A pipeline that reports nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pipeline that writes one INFO record per step to `logger`.
    pub fn with_logger(logger: &'a Logger) -> Self {
        Self {
            steps: Vec::new(),
            logger: Some(logger),
        }
    }

    /// Append a step. No validation beyond the type signature.
    pub fn add_step<F>(&mut self, name: impl Into<String>, transform: F) -> &mut Self
    where
        F: Fn(&T) -> Result<T> + 'a,
    {
        self.steps.push(Step::new(name, transform));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(Step::name)
    }

    /// Run every step in order and return the last table, or `table` itself
    /// when no steps are registered.
    ///
    /// # Errors
    ///
    /// - [`DfflowError::InvalidInput`](crate::error::DfflowError::InvalidInput)
    ///   if `table` fails the capability check.
    /// - The first error returned by a step, unchanged.
    /// - Any error writing a log record.
    pub fn run(&self, table: T) -> Result<T> {
        self.run_with_report(table).map(|(table, _)| table)
    }

    /// Like [`Pipeline::run`], also returning each step's shape transition.
    ///
    /// # Errors
    ///
    /// See [`Pipeline::run`].
    pub fn run_with_report(&self, table: T) -> Result<(T, RunReport)> {
        ensure_table(&table)?;

        let start = Instant::now();
        let input = table.shape();
        let mut current = table;
        let mut steps = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let before = current.shape();
            tracing::debug!(step = step.name(), shape = %before, "Running step");

            let next = step.apply(&current)?;
            let after = next.shape();

            if let Some(logger) = self.logger {
                logger.info(
                    &format!("Step '{}' completed | {before} → {after}", step.name()),
                    &next,
                )?;
            }

            steps.push(StepReport {
                name: step.name().to_owned(),
                before,
                after,
            });
            current = next;
        }

        let report = RunReport {
            input,
            output: current.shape(),
            steps,
            duration: start.elapsed(),
        };
        tracing::info!("{}", report.summary());

        Ok((current, report))
    }
}
