//! Logging bootstrap
//!
//! The crate logs through the standard `log` facade (`log::debug!` while
//! building descriptors, `log::warn!` for suspicious mappings). Applications
//! that don't install their own logger can call [`init_logging`] once at
//! startup; it is safe to call more than once.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Once;

static INIT: Once = Once::new();

/// Log levels in order of severity (compatible with standard log crate)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}

/// Logging section of the mapping configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Env: ESMAP_LOG_LEVEL
    /// Default: warn
    pub level: LogLevel,
    /// Prefix records with a timestamp
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: LogLevel::Warn, timestamps: true }
    }
}

/// Install an `env_logger` backend for the `log` facade.
///
/// Only the first call has an effect. If the application already installed a
/// logger this is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(config.level.into());
        if !config.timestamps {
            builder.format_timestamp(None);
        }
        if builder.try_init().is_err() {
            log::debug!("Logger already installed, keeping the existing one");
        }
    });
}
