//! Application logging.
//!
//! Two sinks: the `log` facade, dispatched by `fern` to a file when logging is
//! enabled, and an in-memory [`Logger`] whose entries back the logs dialog.
//! Nothing is ever written to stdout while the TUI owns the terminal.

use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::constants::MAX_LOG_ENTRIES;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_enabled: false,
        }
    }

    /// Build the logger and, when `enabled`, route the `log` facade to the log file.
    pub fn from_config(enabled: bool, level: LevelFilter) -> Result<Self> {
        let mut logger = Self::new();
        if enabled {
            let path = Self::get_log_file_path()?;
            init_file_logging(&path, level)?;
            logger.file_enabled = true;
        }
        Ok(logger)
    }

    /// Whether entries are also written to the log file
    pub fn is_enabled(&self) -> bool {
        self.file_enabled
    }

    /// Add a log entry
    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_LOG_ENTRIES {
                let overflow = logs.len() - MAX_LOG_ENTRIES;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Location of the log file: `<cache_dir>/typetodo/typetodo.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join("typetodo").join("typetodo.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a `fern` dispatcher writing `log` records to `path`.
///
/// Only the first call in a process installs a logger; later calls are
/// reported and otherwise ignored.
pub fn init_file_logging(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Warn)
        .level_for("typetodo", level)
        .chain(file)
        .apply();

    if let Err(e) = result {
        log::warn!("File logging already initialized: {}", e);
    }
    Ok(())
}
