//! Error types for dirsync
//!
//! Uses `thiserror` for library errors. Planning never fails; only the
//! collaborators around it (reading, executing, configuration) do.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::application::reconcile::ReconcileReport;
use crate::domain::ports::ReadError;
use crate::infrastructure::fs::ExcludeError;

/// Result type alias for dirsync operations
pub type DirsyncResult<T> = Result<T, DirsyncError>;

/// Which of the two trees an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Destination => write!(f, "destination"),
        }
    }
}

/// Main error type for dirsync operations
#[derive(Error, Debug)]
pub enum DirsyncError {
    /// One of the trees could not be inventoried; nothing was planned
    #[error("failed to read {side} tree: {source}")]
    Read { side: Side, source: ReadError },

    /// One or more actions failed; the report tells what did and did not run
    #[error("reconciliation failed: {}", .0.failure_summary())]
    Execution(Box<ReconcileReport>),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Exclude patterns did not compile
    #[error("{0}")]
    Exclude(#[from] ExcludeError),

    /// A global tracing subscriber could not be installed
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DirsyncError {
    /// The partial report, if this is an execution failure
    pub fn report(&self) -> Option<&ReconcileReport> {
        match self {
            DirsyncError::Execution(report) => Some(report),
            _ => None,
        }
    }
}
