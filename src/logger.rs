//! File logging setup.
//!
//! The popup owns the terminal while it runs, so log records never go to
//! stdout or stderr. When logging is enabled they are written to a file in the
//! user's data directory through a `fern` dispatch; otherwise the `log` macros
//! are no-ops.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the default log file path
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("contact-popup").join("contact-popup.log"))
}

/// Install the global logger according to config.
///
/// Returns the path being written to, or `None` when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    init_to_file(config, &path)?;
    Ok(Some(path))
}

/// Install the global logger writing to a specific file
pub fn init_to_file(config: &LoggingConfig, path: &Path) -> Result<()> {
    let level = config.level_filter()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file)
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(())
}
