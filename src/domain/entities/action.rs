//! PlannedAction entity - one unit of reconciliation work

use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of a planned action, without its paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Copy,
    Move,
    Delete,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Copy => write!(f, "copy"),
            ActionKind::Move => write!(f, "move"),
            ActionKind::Delete => write!(f, "delete"),
        }
    }
}

/// A filesystem mutation needed to bring the destination in line with the source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlannedAction {
    /// Create `dest` from the bytes of `source`
    Copy { source: PathBuf, dest: PathBuf },
    /// Rename a destination file; no bytes are transferred
    Move { from: PathBuf, to: PathBuf },
    /// Remove a destination file whose content has no counterpart in the source
    Delete { path: PathBuf },
}

impl PlannedAction {
    pub fn copy(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        PlannedAction::Copy {
            source: source.into(),
            dest: dest.into(),
        }
    }

    pub fn rename(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        PlannedAction::Move {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn delete(path: impl Into<PathBuf>) -> Self {
        PlannedAction::Delete { path: path.into() }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            PlannedAction::Copy { .. } => ActionKind::Copy,
            PlannedAction::Move { .. } => ActionKind::Move,
            PlannedAction::Delete { .. } => ActionKind::Delete,
        }
    }

    /// The destination path this action writes or removes
    pub fn target(&self) -> &Path {
        match self {
            PlannedAction::Copy { dest, .. } => dest,
            PlannedAction::Move { to, .. } => to,
            PlannedAction::Delete { path } => path,
        }
    }
}

impl fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannedAction::Copy { source, dest } => {
                write!(f, "copy {} -> {}", source.display(), dest.display())
            }
            PlannedAction::Move { from, to } => {
                write!(f, "move {} -> {}", from.display(), to.display())
            }
            PlannedAction::Delete { path } => write!(f, "delete {}", path.display()),
        }
    }
}
