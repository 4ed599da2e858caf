//! File System Implementations
//!
//! Concrete implementations of the InventoryReader and ActionExecutor ports.

mod exclude;
mod local;
mod memory;

pub use exclude::{ExcludeError, ExcludeMatcher, ExcludePatterns};
pub use local::{hash_file, LocalFs};
pub use memory::MemoryFs;
