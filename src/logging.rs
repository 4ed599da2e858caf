//! Logging System
//!
//! Structured logging using the `tracing` crate. The library only emits
//! events; a driver calls [`init`] once to decide where they go.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{DirsyncError, DirsyncResult};

/// Environment variable holding a full filter directive, e.g. `dirsync=trace`
pub const LOG_ENV_VAR: &str = "DIRSYNC_LOG";

/// Install a global subscriber writing to stderr
///
/// `DIRSYNC_LOG` wins over `config.level`. Fails if a global subscriber is
/// already set or the level directive does not parse.
pub fn init(config: &LoggingConfig) -> DirsyncResult<()> {
    let filter = build_env_filter(config)?;
    let registry = Registry::default().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| DirsyncError::Logging(e.to_string()))
}

/// Build the filter from `DIRSYNC_LOG`, falling back to the configured level
fn build_env_filter(config: &LoggingConfig) -> DirsyncResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    parse_filter(&config.level)
}

fn parse_filter(level: &str) -> DirsyncResult<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| DirsyncError::Logging(format!("invalid log level '{}': {}", level, e)))
}
