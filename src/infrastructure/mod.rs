//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory) and exclude patterns

pub mod fs;

pub use fs::{LocalFs, MemoryFs};
