//! Planning contracts
//!
//! What the planner emits for a given pair of trees, in what order.

use std::path::Path;

use dirsync::{ActionKind, MemoryFs, PlannedAction, ReconcileUseCase};

fn plan(fs: &MemoryFs) -> Vec<PlannedAction> {
    ReconcileUseCase::new(fs, fs)
        .plan(Path::new("/src"), Path::new("/dst"))
        .unwrap()
}

fn render(actions: &[PlannedAction]) -> String {
    actions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// CONTRACT: Identical trees need no actions.
#[test]
fn contract_identical_trees_plan_nothing() {
    let fs = MemoryFs::new()
        .with_file("/src/a", "alpha")
        .with_file("/src/nested/b", "beta")
        .with_file("/dst/a", "alpha")
        .with_file("/dst/nested/b", "beta");

    assert!(plan(&fs).is_empty());
}

/// CONTRACT: Every copy and move comes before every delete.
///
/// Prevents: deleting the only destination copy of content a later move
/// still needs.
#[test]
fn contract_deletes_follow_copies_and_moves() {
    let fs = MemoryFs::new()
        .with_file("/src/b", "b")
        .with_file("/src/renamed", "kept")
        .with_file("/dst/a", "a")
        .with_file("/dst/original", "kept")
        .with_file("/dst/z", "z");

    let kinds: Vec<ActionKind> = plan(&fs).iter().map(PlannedAction::kind).collect();
    let first_delete = kinds
        .iter()
        .position(|kind| *kind == ActionKind::Delete)
        .unwrap();
    assert!(kinds[first_delete..]
        .iter()
        .all(|kind| *kind == ActionKind::Delete));
    assert_eq!(kinds.len(), 4);
}

/// CONTRACT: Moves stay inside the destination tree.
#[test]
fn contract_moves_never_touch_source() {
    let fs = MemoryFs::new()
        .with_file("/src/new-name", "same bytes")
        .with_file("/dst/old-name", "same bytes");

    for action in plan(&fs) {
        if let PlannedAction::Move { from, to } = action {
            assert!(from.starts_with("/dst"));
            assert!(to.starts_with("/dst"));
        }
    }
}

/// CONTRACT: Duplicate content collapses to one entry, last name wins.
#[test]
fn contract_duplicate_source_content_copies_once() {
    let fs = MemoryFs::new()
        .with_file("/src/first", "dup")
        .with_file("/src/second", "dup")
        .with_dir("/dst");

    assert_eq!(
        plan(&fs),
        vec![PlannedAction::copy("/src/second", "/dst/second")]
    );
}

/// CONTRACT: The rendered plan for a mixed tree is stable.
#[test]
fn contract_mixed_plan_rendering() {
    let fs = MemoryFs::new()
        .with_file("/src/a", "alpha")
        .with_file("/src/b", "beta")
        .with_file("/src/docs/c", "gamma")
        .with_file("/dst/a", "alpha")
        .with_file("/dst/c", "gamma")
        .with_file("/dst/old", "stale");

    insta::assert_snapshot!(render(&plan(&fs)), @r"
    copy /src/b -> /dst/b
    move /dst/c -> /dst/docs/c
    delete /dst/old
    ");
}
