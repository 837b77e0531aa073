//! Configuration for stackpilot binaries.
//!
//! Values are read from `STACKPILOT_`-prefixed environment variables using figment,
//! e.g. `STACKPILOT_LOG_LEVEL=debug` or `STACKPILOT_LOG_FORMAT=json`.

use figment::{Figment, providers::Env};
use serde::Deserialize;

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, multi-line events
    Pretty,
    /// One JSON object per event
    Json,
}

#[cfg(debug_assertions)]
const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Pretty;
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Json;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log level for this application's targets
    ///
    /// e.g. "debug" would be similar to "warn,stackpilot_common=debug,stackpilot_probe=debug"
    ///
    /// Valid values are: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format (pretty in debug builds, json in release builds)
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

/// Default log level of "info"
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    DEFAULT_LOG_FORMAT
}

impl Config {
    /// Load configuration from `STACKPILOT_*` environment variables
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::prefixed("STACKPILOT_"))
            .extract()
    }
}
