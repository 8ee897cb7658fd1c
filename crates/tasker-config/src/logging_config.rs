use crate::DEFAULT_LOG_LEVEL;
use crate::log_level::LogLevel;

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Optional log file; stdout when unset
    pub file: Option<PathBuf>,
    /// Colored output for TTY runs (ignored when logging to a file)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            file: None,
            colored: true,
        }
    }
}
