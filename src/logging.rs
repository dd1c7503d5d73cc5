//! Process diagnostics for dfflow.
//!
//! This is separate from [`crate::logger::Logger`]: the step logger writes
//! table records to a file chosen by the caller, while this module wires up
//! `tracing` for the crate's own debug and info events.
//!
//! ```no_run
//! // Console only
//! dfflow::logging::init(None).expect("Failed to initialize logging");
//!
//! tracing::info!("Pipeline starting");
//! ```

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Gets the default diagnostics directory
///
/// Returns:
/// - Windows: `%APPDATA%/dfflow/logs`
/// - macOS: `~/Library/Application Support/dfflow/logs`
/// - Linux: `~/.local/share/dfflow/logs`
///
/// # Errors
///
/// Returns error if the platform data directory is unknown or cannot be created
pub fn default_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;

    let log_dir = base_dir.join("dfflow").join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Installs a global `tracing` subscriber.
///
/// Events go to stderr, and to a daily-rotating `dfflow.<date>.log` inside
/// `log_dir` when one is given. The filter defaults to `info` and honours
/// `RUST_LOG`. Calling this again after a subscriber is installed is a no-op.
///
/// # Errors
///
/// Returns error if the env filter or file appender cannot be created
pub fn init(log_dir: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    let file_layer = match log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(10)
                .filename_prefix("dfflow")
                .filename_suffix("log")
                .build(dir)
                .context("Failed to create file appender")?;

            Some(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_ansi(false)
                    .with_writer(appender)
                    .boxed(),
            )
        }
        None => None,
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialized, log directory: {:?}", log_dir);
    }

    Ok(())
}
