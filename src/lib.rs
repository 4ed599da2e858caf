//! dirsync - content-addressed directory reconciliation
//!
//! Given a source and a destination tree, dirsync works out the copies,
//! renames and deletes that make the destination hold exactly the
//! source's content, using file content rather than names as identity.
//! Planning is a pure function over two inventories; reading trees and
//! applying actions go through swappable ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{reconcile, ReconcileOptions, ReconcileReport, ReconcileUseCase};
pub use config::{Config, FailurePolicy};
pub use domain::entities::{ActionKind, Inventory, PlannedAction};
pub use domain::ports::{ActionExecutor, ExecutionError, FsError, InventoryReader, ReadError};
pub use domain::services::Planner;
pub use domain::value_objects::ContentHash;
pub use error::{DirsyncError, DirsyncResult, Side};
pub use infrastructure::{LocalFs, MemoryFs};
