//! Domain Entities
//!
//! - `Inventory` - content hash → name mapping for one tree
//! - `PlannedAction` - a single copy, move or delete

mod action;
mod inventory;

pub use action::{ActionKind, PlannedAction};
pub use inventory::{Inventory, Iter as InventoryIter};
