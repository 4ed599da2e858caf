//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod action_executor;
pub mod file_system;
pub mod inventory_reader;

pub use action_executor::{ActionExecutor, ExecutionError};
pub use file_system::{FsError, FsResult};
pub use inventory_reader::{InventoryReader, ReadError};
