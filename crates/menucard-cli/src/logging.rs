//! File-based structured logging.
//!
//! The TUI owns stdout and stderr, so log lines never go to the terminal.
//! A JSON `tracing` layer is installed only when a log file is given via
//! `--log-file` or `MENUCARD_LOG`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::types::LogLevel;

pub const LOG_ENV: &str = "MENUCARD_LOG";

/// Pick the log file: explicit flag first, then `MENUCARD_LOG`.
pub fn resolve_log_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    std::env::var_os(LOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Install the global subscriber. Returns the log path when logging is on.
pub fn init(explicit: Option<&Path>, level: LogLevel) -> Result<Option<PathBuf>> {
    let Some(log_path) = resolve_log_path(explicit) else {
        return Ok(None);
    };

    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let layer = fmt::layer()
        .json()
        .with_writer(std::sync::Mutex::new(file))
        .with_target(false);

    tracing_subscriber::registry()
        .with(EnvFilter::new(level.to_string()))
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(event = "cli.logging.started", path = %log_path.display(), level = %level);

    Ok(Some(log_path))
}
