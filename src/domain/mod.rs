//! Domain Layer
//!
//! The reconciliation core - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ContentHash)
//! - `entities/` - Inventory and PlannedAction
//! - `services/` - The Planner
//! - `ports/` - Reader and executor traits implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
