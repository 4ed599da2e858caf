//! Property tests for the pure planner.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use dirsync::{ContentHash, Inventory, PlannedAction, Planner};

fn name() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_-]{1,8}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("/"))
}

fn inventory() -> impl Strategy<Value = Inventory> {
    proptest::collection::vec((any::<Vec<u8>>(), name()), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(content, name)| (ContentHash::from_bytes(&content), name))
            .collect()
    })
}

fn plan(source: &Inventory, dest: &Inventory) -> Vec<PlannedAction> {
    Planner::plan(source, dest, Path::new("/src"), Path::new("/dst")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Planning a tree against itself yields nothing.
    #[test]
    fn property_self_plan_is_empty(inv in inventory()) {
        prop_assert!(plan(&inv, &inv).is_empty());
    }

    /// PROPERTY: Every action references an entry that exists.
    #[test]
    fn property_actions_reference_existing_entries(
        source in inventory(),
        dest in inventory(),
    ) {
        let source_paths: HashSet<PathBuf> =
            source.names().map(|n| Path::new("/src").join(n)).collect();
        let dest_paths: HashSet<PathBuf> =
            dest.names().map(|n| Path::new("/dst").join(n)).collect();

        for action in plan(&source, &dest) {
            match action {
                PlannedAction::Copy { source, .. } => {
                    prop_assert!(source_paths.contains(&source));
                }
                PlannedAction::Move { from, .. } => {
                    prop_assert!(dest_paths.contains(&from));
                }
                PlannedAction::Delete { path } => {
                    prop_assert!(dest_paths.contains(&path));
                }
            }
        }
    }

    /// PROPERTY: One action per source entry needing work plus one per
    /// orphan, never more.
    #[test]
    fn property_action_count_is_bounded(source in inventory(), dest in inventory()) {
        let actions = plan(&source, &dest);
        prop_assert!(actions.len() <= source.len() + dest.len());
    }

    /// PROPERTY: Hashing is a pure function of the bytes.
    #[test]
    fn property_hash_is_stable(content in any::<Vec<u8>>()) {
        let a = ContentHash::from_bytes(&content);
        let b = ContentHash::from_reader(content.as_slice()).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.to_string().parse::<ContentHash>().unwrap(), a);
    }
}
