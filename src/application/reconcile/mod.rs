//! Reconcile Use Case
//!
//! Orchestrates a reconciliation run.
//!
//! This module handles:
//! - Reading both inventories before anything else happens
//! - Planning the full action list
//! - Applying actions in order under a failure policy
//! - Reporting applied, failed and unattempted actions

mod options;
mod result;
mod use_case;

pub use options::ReconcileOptions;
pub use result::{ActionCounts, ReconcileReport};
pub use use_case::{reconcile, ReconcileUseCase};
