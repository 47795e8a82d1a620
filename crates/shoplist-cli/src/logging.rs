//! File logging setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so log records go to
//! `<data dir>/shoplist.log` instead of the console.

use crate::types::LogLevel;
use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "shoplist.log";

/// Default filter directives for our own crates at the given level.
pub fn default_directives(level: LogLevel) -> String {
    format!("shoplist={level},shoplist_store={level}")
}

/// Install the global subscriber writing to the log file in `data_dir`.
///
/// `RUST_LOG` takes precedence over `level` when it is set.
pub fn init(data_dir: &Path, level: LogLevel) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data dir: {}", data_dir.display()))?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(log_path)
}
