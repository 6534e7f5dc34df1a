//! Logging setup shared by binaries embedding the allocator.

use serde::Deserialize;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{BalancingError, Result};

/// Environment variable that overrides the configured log filter
pub const LOG_ENV_VAR: &str = "CS_BALANCE_LOG";

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level name (`trace`, `debug`, `info`, `warn`, `error`)
    pub level: String,
    /// Whether to enable JSON formatting
    pub json: bool,
    /// Whether to include file and line information
    pub file_info: bool,
    /// Whether to log span close events with timings
    pub log_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
            json: false,
            file_info: false,
            log_spans: false,
        }
    }
}

impl LoggingConfig {
    /// Apply overrides on top of file settings. `json` only ever turns JSON on.
    pub fn with_overrides(mut self, level: Option<Level>, json: bool) -> Self {
        if let Some(level) = level {
            self.level = level.to_string();
        }
        self.json |= json;
        self
    }
}

/// Install a global subscriber for the given configuration.
///
/// `CS_BALANCE_LOG` takes precedence over `config.level` when set. Fails if
/// a global subscriber is already installed.
pub fn setup_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let span_events = if config.log_spans {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_span_events(span_events)
        .with_writer(std::io::stderr)
        .with_file(config.file_info)
        .with_line_number(config.file_info);

    let installed = if config.json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };

    installed.map_err(|e| BalancingError::invalid_config(format!("Logging setup failed: {}", e)))
}

/// Parse a log level from a string
pub fn parse_log_level(level: &str) -> Result<Level> {
    Level::from_str(level)
        .map_err(|_| BalancingError::invalid_config(format!("Invalid log level: {}", level)))
}
