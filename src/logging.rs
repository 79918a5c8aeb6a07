//! Log setup
//!
//! The TUI owns the terminal, so log lines go to a file.

use crate::config::LogConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// The filter comes from `level_override` if given, then `RUST_LOG`, then
/// the config file. Returns the log file path.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or the log file
/// cannot be opened.
pub fn init(config: &LogConfig, level_override: Option<&str>) -> Result<PathBuf> {
    let filter = match level_override {
        Some(level) => EnvFilter::try_new(level),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level)),
    }
    .context("invalid log filter")?;

    let path = config.file_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(path)
}
