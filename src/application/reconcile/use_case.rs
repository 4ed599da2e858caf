//! Reconcile Use Case
//!
//! Read both trees, plan, then apply each action in order.

use std::path::Path;

use tracing::{debug, info, info_span, warn};

use crate::config::FailurePolicy;
use crate::domain::entities::{Inventory, PlannedAction};
use crate::domain::ports::{ActionExecutor, InventoryReader};
use crate::domain::services::{find_overlaps, Planner};
use crate::error::{DirsyncError, DirsyncResult, Side};

use super::options::ReconcileOptions;
use super::result::{ActionCounts, ReconcileReport};

/// Reconcile `dest_root` with `source_root` using default options.
///
/// Reads both inventories, plans, and applies every action, stopping at
/// the first failure.
pub fn reconcile<R, E>(
    source_root: &Path,
    dest_root: &Path,
    reader: R,
    executor: E,
) -> DirsyncResult<ReconcileReport>
where
    R: InventoryReader,
    E: ActionExecutor,
{
    ReconcileUseCase::new(reader, executor).execute(
        source_root,
        dest_root,
        &ReconcileOptions::default(),
    )
}

/// Reconcile use case - drives reader, planner and executor
pub struct ReconcileUseCase<R, E>
where
    R: InventoryReader,
    E: ActionExecutor,
{
    reader: R,
    executor: E,
}

impl<R, E> ReconcileUseCase<R, E>
where
    R: InventoryReader,
    E: ActionExecutor,
{
    /// Create a new reconcile use case
    pub fn new(reader: R, executor: E) -> Self {
        Self { reader, executor }
    }

    /// Read both trees and return the planned actions without applying them
    pub fn plan(&self, source_root: &Path, dest_root: &Path) -> DirsyncResult<Vec<PlannedAction>> {
        let source = self.read(Side::Source, source_root)?;
        let dest = self.read(Side::Destination, dest_root)?;
        Ok(Planner::plan(&source, &dest, source_root, dest_root).collect())
    }

    /// Execute a reconciliation run
    ///
    /// A read failure on either side aborts before anything is planned.
    /// Any action failure is returned as [`DirsyncError::Execution`] carrying
    /// the partial report.
    pub fn execute(
        &self,
        source_root: &Path,
        dest_root: &Path,
        options: &ReconcileOptions,
    ) -> DirsyncResult<ReconcileReport> {
        let span = info_span!(
            "reconcile",
            source = %source_root.display(),
            dest = %dest_root.display(),
            dry_run = options.dry_run,
        );
        let _entered = span.enter();

        let actions = self.plan(source_root, dest_root)?;
        let counts = ActionCounts::tally(&actions);
        info!(
            copies = counts.copies,
            moves = counts.moves,
            deletes = counts.deletes,
            "plan ready"
        );

        let overlaps = find_overlaps(&actions);
        for path in &overlaps {
            warn!(
                path = %path.display(),
                "plan may overwrite this path before it is read; source and destination disagree on its content"
            );
        }

        if options.dry_run {
            let mut report = ReconcileReport::new(true);
            report.not_attempted = actions;
            report.overlaps = overlaps;
            return Ok(report);
        }

        let mut report = self.apply_all(actions, options.failure_policy);
        report.overlaps = overlaps;
        if report.is_success() {
            info!(applied = report.applied.len(), "reconciliation complete");
            Ok(report)
        } else {
            Err(DirsyncError::Execution(Box::new(report)))
        }
    }

    fn read(&self, side: Side, root: &Path) -> DirsyncResult<Inventory> {
        let inventory = self
            .reader
            .read_inventory(root)
            .map_err(|source| DirsyncError::Read { side, source })?;
        debug!(%side, entries = inventory.len(), "inventory loaded");
        Ok(inventory)
    }

    fn apply_all(&self, actions: Vec<PlannedAction>, policy: FailurePolicy) -> ReconcileReport {
        let mut report = ReconcileReport::new(false);
        let mut remaining = actions.into_iter();

        while let Some(action) = remaining.next() {
            match self.executor.apply(&action) {
                Ok(()) => {
                    debug!(%action, "applied");
                    report.applied.push(action);
                }
                Err(err) => {
                    warn!(error = %err, "action failed");
                    report.failed.push(err);
                    if policy == FailurePolicy::Abort {
                        report.not_attempted.extend(remaining.by_ref());
                        break;
                    }
                }
            }
        }

        report
    }
}
