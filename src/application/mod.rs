//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ReconcileUseCase` - read both trees, plan, apply

pub mod reconcile;

pub use reconcile::{reconcile, ActionCounts, ReconcileOptions, ReconcileReport, ReconcileUseCase};
