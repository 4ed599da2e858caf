//! Reconcile result types

use std::path::PathBuf;

use crate::domain::entities::{ActionKind, PlannedAction};
use crate::domain::ports::ExecutionError;

/// Number of actions per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionCounts {
    pub copies: usize,
    pub moves: usize,
    pub deletes: usize,
}

impl ActionCounts {
    pub fn tally<'a>(actions: impl IntoIterator<Item = &'a PlannedAction>) -> Self {
        let mut counts = Self::default();
        for action in actions {
            match action.kind() {
                ActionKind::Copy => counts.copies += 1,
                ActionKind::Move => counts.moves += 1,
                ActionKind::Delete => counts.deletes += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.copies + self.moves + self.deletes
    }
}

/// Outcome of a reconciliation run
///
/// Every planned action ends up in exactly one of `applied`, `failed` or
/// `not_attempted`, so a caller can tell how far a run got.
#[derive(Debug, Default)]
pub struct ReconcileReport {
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Actions applied successfully, in order
    pub applied: Vec<PlannedAction>,
    /// Actions that failed
    pub failed: Vec<ExecutionError>,
    /// Actions skipped by a dry run or left over after an abort
    pub not_attempted: Vec<PlannedAction>,
    /// Destination paths the plan may clobber before reading them
    pub overlaps: Vec<PathBuf>,
}

impl ReconcileReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Check if no action failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Check if the trees were already in sync
    pub fn is_noop(&self) -> bool {
        self.planned_count() == 0
    }

    /// Total number of actions the planner produced
    pub fn planned_count(&self) -> usize {
        self.applied.len() + self.failed.len() + self.not_attempted.len()
    }

    /// Per-kind counts of applied actions
    pub fn applied_counts(&self) -> ActionCounts {
        ActionCounts::tally(&self.applied)
    }

    /// One-line description of the failures, used in error messages
    pub fn failure_summary(&self) -> String {
        match self.failed.first() {
            None => "no failures".to_string(),
            Some(first) => format!(
                "{} of {} action(s) failed ({} applied, {} not attempted); first: {}",
                self.failed.len(),
                self.planned_count(),
                self.applied.len(),
                self.not_attempted.len(),
                first
            ),
        }
    }
}
