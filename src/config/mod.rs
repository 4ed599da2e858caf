//! Configuration module for dirsync
//!
//! Configuration hierarchy:
//! 1. Environment variables (DIRSYNC_*) (highest priority)
//! 2. Explicit config file, or `<root>/.dirsync.toml`
//! 3. User config (`<config dir>/dirsync/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, FailurePolicy, LogFormat, LoggingConfig, SyncConfig};
