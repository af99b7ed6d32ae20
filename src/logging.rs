//! Logging setup
//!
//! Logs go to a file in the data directory only; writing to stderr would
//! corrupt the TUI.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber writing to `<dir>/<file_name>`
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. The returned guard
/// flushes buffered lines when dropped; keep it alive until exit.
///
/// # Errors
/// Returns an error if the directory cannot be created or a subscriber is
/// already installed.
pub fn init(dir: &Path, file_name: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Logging to {}", dir.join(file_name).display());

    Ok(guard)
}
