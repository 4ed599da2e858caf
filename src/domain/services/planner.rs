//! Reconciliation planning service
//!
//! Pure domain logic that decides which copies, moves and deletes make a
//! destination tree hold exactly the content of a source tree. Content
//! identity, not file names, drives every decision. No I/O happens here.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Inventory, InventoryIter, PlannedAction};

/// Pure planning service
///
/// Takes two inventories and the roots they were read from and produces
/// the action sequence. All filesystem access is done by the caller.
pub struct Planner;

impl Planner {
    /// Plan the actions that reconcile `dest` with `source`.
    ///
    /// The returned iterator is lazy and runs two passes:
    ///
    /// 1. For each source entry: `Copy` when the content is missing from the
    ///    destination, `Move` when it exists there under another name.
    /// 2. For each destination entry: `Delete` when the content is missing
    ///    from the source.
    ///
    /// Entries present on both sides under the same name produce nothing,
    /// so planning an already-synced pair yields an empty sequence.
    pub fn plan<'a>(
        source: &'a Inventory,
        dest: &'a Inventory,
        source_root: &'a Path,
        dest_root: &'a Path,
    ) -> Plan<'a> {
        Plan {
            source,
            dest,
            source_root,
            dest_root,
            pass: Pass::Sources(source.iter()),
        }
    }
}

/// Lazy, finite action sequence produced by [`Planner::plan`]
#[derive(Debug, Clone)]
pub struct Plan<'a> {
    source: &'a Inventory,
    dest: &'a Inventory,
    source_root: &'a Path,
    dest_root: &'a Path,
    pass: Pass<'a>,
}

#[derive(Debug, Clone)]
enum Pass<'a> {
    Sources(InventoryIter<'a>),
    Orphans(InventoryIter<'a>),
    Done,
}

impl Iterator for Plan<'_> {
    type Item = PlannedAction;

    fn next(&mut self) -> Option<PlannedAction> {
        loop {
            match &mut self.pass {
                Pass::Sources(entries) => match entries.next() {
                    Some((hash, name)) => match self.dest.get(hash) {
                        None => {
                            return Some(PlannedAction::copy(
                                self.source_root.join(name),
                                self.dest_root.join(name),
                            ))
                        }
                        Some(existing) if existing != name => {
                            return Some(PlannedAction::rename(
                                self.dest_root.join(existing),
                                self.dest_root.join(name),
                            ))
                        }
                        Some(_) => {}
                    },
                    None => self.pass = Pass::Orphans(self.dest.iter()),
                },
                Pass::Orphans(entries) => match entries.next() {
                    Some((hash, name)) => {
                        if !self.source.contains(hash) {
                            return Some(PlannedAction::delete(self.dest_root.join(name)));
                        }
                    }
                    None => self.pass = Pass::Done,
                },
                Pass::Done => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for Plan<'_> {}

/// Destination paths whose content the plan may clobber, in first-seen order.
///
/// A path is reported when an action writes or deletes it after an earlier
/// action already wrote it, or when a `Move` reads it after an earlier
/// action wrote it. Both happen only when the two trees use a name for
/// different content: same-name replacements, rename chains and swaps.
/// Applying such a plan in order can overwrite content before it is moved
/// away. The plan itself is left untouched; callers decide whether to warn.
pub fn find_overlaps(actions: &[PlannedAction]) -> Vec<PathBuf> {
    let mut written: HashSet<&Path> = HashSet::new();
    let mut flagged: HashSet<&Path> = HashSet::new();
    let mut order = Vec::new();

    for action in actions {
        if let PlannedAction::Move { from, .. } = action {
            if written.contains(from.as_path()) && flagged.insert(from.as_path()) {
                order.push(from.clone());
            }
        }
        let target = action.target();
        if !written.insert(target) && flagged.insert(target) {
            order.push(target.to_path_buf());
        }
    }
    order
}
