//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a plain-text
//! file instead (default: `~/.local/share/travelio/travelio.log`). Disabled
//! entirely with `[logging] enabled = false`. If the file cannot be
//! opened the app runs without logging.

use crate::config::model::LoggingConfig;
use crate::config::expand_home;
use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// Install the global subscriber. Returns the log file path when logging is
/// active, `None` when it is disabled or the file cannot be opened.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level: Level = config
        .level
        .parse()
        .with_context(|| format!("Unknown log level '{}'", config.level))?;

    let path = expand_home(&config.file);
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            // The terminal is not in raw mode yet, so stderr is still visible.
            eprintln!("warning: logging disabled: {:#}", e);
            return Ok(None);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(file: &str, level: &str) -> LoggingConfig {
        LoggingConfig {
            enabled: true,
            level: level.to_string(),
            file: file.to_string(),
        }
    }

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let mut config = logging("/tmp/travelio-unused.log", "info");
        config.enabled = false;
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn test_unwritable_log_file_is_not_fatal() {
        let config = logging("/proc/travelio-logs/travelio.log", "info");
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn test_unknown_level_is_fatal() {
        let config = logging("/proc/travelio-logs/travelio.log", "loud");
        let err = init(&config).unwrap_err();
        assert!(err.to_string().contains("Unknown log level"));
    }
}
