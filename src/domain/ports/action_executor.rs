//! ActionExecutor port - applies planned actions to the destination

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::PlannedAction;

use super::file_system::{FsError, FsResult};

/// A planned action that could not be applied
#[derive(Error, Debug)]
#[error("failed to {} ({action}): {source}", .action.kind())]
pub struct ExecutionError {
    pub action: PlannedAction,
    #[source]
    pub source: FsError,
}

impl ExecutionError {
    pub fn new(action: PlannedAction, source: FsError) -> Self {
        Self { action, source }
    }
}

/// Performs the filesystem mutations behind each action kind.
///
/// Each call is independent; ordering and failure policy belong to the
/// driver.
pub trait ActionExecutor {
    /// Create `dst` with the exact bytes of `src`
    fn copy(&self, src: &Path, dst: &Path) -> FsResult<()>;

    /// Rename `from` to `to`. Fails if `from` no longer exists.
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Remove `path`. Fails if it is already absent.
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Dispatch a planned action to the matching operation
    fn apply(&self, action: &PlannedAction) -> Result<(), ExecutionError> {
        let outcome = match action {
            PlannedAction::Copy { source, dest } => self.copy(source, dest),
            PlannedAction::Move { from, to } => self.rename(from, to),
            PlannedAction::Delete { path } => self.remove(path),
        };
        outcome.map_err(|source| ExecutionError::new(action.clone(), source))
    }
}

impl<T: ActionExecutor + ?Sized> ActionExecutor for &T {
    fn copy(&self, src: &Path, dst: &Path) -> FsResult<()> {
        (**self).copy(src, dst)
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).rename(from, to)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        (**self).remove(path)
    }
}
