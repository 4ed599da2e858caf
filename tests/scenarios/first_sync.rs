//! Scenario: syncing into an empty or partially filled destination.

use dirsync::{reconcile, LocalFs, PlannedAction};

use crate::common::*;

#[test]
fn file_in_source_but_not_destination_is_copied() {
    let trees = TestTrees::new();
    trees.write_source("my-file", USEFUL_FILE);

    let fs = LocalFs::new();
    let report = reconcile(trees.source(), trees.dest(), &fs, &fs).unwrap();

    assert_eq!(
        report.applied,
        vec![PlannedAction::copy(
            trees.source().join("my-file"),
            trees.dest().join("my-file"),
        )]
    );
    assert_eq!(trees.read_dest("my-file").as_deref(), Some(USEFUL_FILE));
}

#[test]
fn nested_source_files_land_at_same_relative_path() {
    let trees = TestTrees::new();
    trees.write_source("docs/notes.md", NOTES);
    trees.write_source("top.txt", USEFUL_FILE);

    let fs = LocalFs::new();
    reconcile(trees.source(), trees.dest(), &fs, &fs).unwrap();

    assert_eq!(trees.dest_files(), vec!["docs/notes.md", "top.txt"]);
    assert_eq!(trees.read_dest("docs/notes.md").as_deref(), Some(NOTES));
}

#[test]
fn second_run_is_a_noop() {
    let trees = TestTrees::new();
    trees.write_source("a.txt", "alpha");
    trees.write_source("b/b.txt", "beta");
    trees.write_dest("stale.txt", STALE_FILE);

    let fs = LocalFs::new();
    let first = reconcile(trees.source(), trees.dest(), &fs, &fs).unwrap();
    assert_eq!(first.applied.len(), 3);

    let second = reconcile(trees.source(), trees.dest(), &fs, &fs).unwrap();
    assert!(second.is_noop());
    assert_eq!(trees.dest_files(), trees.source_files());
}

#[test]
fn empty_trees_need_nothing() {
    let trees = TestTrees::new();
    let fs = LocalFs::new();
    let report = reconcile(trees.source(), trees.dest(), &fs, &fs).unwrap();
    assert!(report.is_noop());
    assert!(report.is_success());
}

#[test]
fn missing_destination_root_fails_before_touching_anything() {
    let trees = TestTrees::new();
    trees.write_source("a.txt", "alpha");
    let missing = trees.dest().join("not-here");

    let fs = LocalFs::new();
    let err = reconcile(trees.source(), &missing, &fs, &fs).unwrap_err();

    assert!(matches!(
        err,
        dirsync::DirsyncError::Read {
            side: dirsync::Side::Destination,
            ..
        }
    ));
    assert!(!missing.exists());
}
