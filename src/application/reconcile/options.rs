//! Reconcile options

use crate::config::{FailurePolicy, SyncConfig};

/// Options for a reconciliation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Plan only; nothing is applied
    pub dry_run: bool,
    /// What to do when an action fails
    pub failure_policy: FailurePolicy,
}

impl ReconcileOptions {
    /// Create new reconcile options
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the run-time settings from the `[sync]` config section
    pub fn from_config(config: &SyncConfig) -> Self {
        Self {
            dry_run: config.dry_run,
            failure_policy: config.failure_policy,
        }
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
