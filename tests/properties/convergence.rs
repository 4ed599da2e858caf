//! Property tests for full reconcile runs against the in-memory file system.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use dirsync::domain::services::find_overlaps;
use dirsync::{reconcile, MemoryFs, ReconcileUseCase};

/// Where one piece of content lives on each side, if anywhere.
///
/// Names are derived from the content index, so a name never refers to two
/// different contents across the trees. Plans built from these placements
/// never overlap; `shared_names` below covers trees that reuse names.
#[derive(Debug, Clone)]
struct Placement {
    source: Option<String>,
    dest: Option<String>,
}

fn name_for(index: usize) -> impl Strategy<Value = String> {
    (0..3usize, any::<bool>()).prop_map(move |(variant, nested)| {
        let file = format!("f{index}_{variant}");
        if nested {
            format!("sub/{file}")
        } else {
            file
        }
    })
}

fn placements() -> impl Strategy<Value = Vec<Placement>> {
    (0..10usize).prop_flat_map(|count| {
        (0..count)
            .map(|index| {
                (
                    proptest::option::of(name_for(index)),
                    proptest::option::of(name_for(index)),
                )
                    .prop_map(|(source, dest)| Placement { source, dest })
            })
            .collect::<Vec<_>>()
    })
}

fn build(placements: &[Placement]) -> MemoryFs {
    let fs = MemoryFs::new().with_dir("/src").with_dir("/dst");
    for (index, placement) in placements.iter().enumerate() {
        let content = format!("content {index}");
        if let Some(name) = &placement.source {
            fs.write(Path::new("/src").join(name), &content);
        }
        if let Some(name) = &placement.dest {
            fs.write(Path::new("/dst").join(name), &content);
        }
    }
    fs
}

fn tree(fs: &MemoryFs, root: &str) -> BTreeMap<PathBuf, Vec<u8>> {
    fs.files()
        .into_iter()
        .filter_map(|path| {
            let rel = path.strip_prefix(root).ok()?.to_path_buf();
            let content = fs.read(&path)?;
            Some((rel, content))
        })
        .collect()
}

/// Each content index gets an optional name per side, drawn from a small
/// shared pool so the trees often reuse a name for different content.
/// Names already taken on a side are dropped, keeping names and contents
/// unique within each tree.
fn shared_names() -> impl Strategy<Value = Vec<Placement>> {
    let pool = || {
        proptest::option::of(proptest::sample::select(vec!["a", "b", "c", "d", "sub/e"]))
    };
    proptest::collection::vec((pool(), pool()), 0..6).prop_map(|pairs| {
        let mut taken_source = Vec::new();
        let mut taken_dest = Vec::new();
        pairs
            .into_iter()
            .map(|(source, dest)| Placement {
                source: claim(&mut taken_source, source),
                dest: claim(&mut taken_dest, dest),
            })
            .collect()
    })
}

fn claim(taken: &mut Vec<&'static str>, name: Option<&'static str>) -> Option<String> {
    let name = name?;
    if taken.contains(&name) {
        return None;
    }
    taken.push(name);
    Some(name.to_string())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After a successful run the destination mirrors the source.
    #[test]
    fn property_reconcile_converges(placements in placements()) {
        let fs = build(&placements);
        let source_before = tree(&fs, "/src");

        reconcile(Path::new("/src"), Path::new("/dst"), &fs, &fs).unwrap();

        prop_assert_eq!(tree(&fs, "/dst"), source_before.clone());
        prop_assert_eq!(tree(&fs, "/src"), source_before);
    }

    /// PROPERTY: A second run plans nothing.
    #[test]
    fn property_reconcile_is_idempotent(placements in placements()) {
        let fs = build(&placements);

        reconcile(Path::new("/src"), Path::new("/dst"), &fs, &fs).unwrap();
        let replan = ReconcileUseCase::new(&fs, &fs)
            .plan(Path::new("/src"), Path::new("/dst"))
            .unwrap();

        prop_assert!(replan.is_empty(), "second plan was {:?}", replan);
    }

    /// PROPERTY: A plan with no reported overlaps always converges, so any
    /// plan that could lose content is flagged before it runs.
    #[test]
    fn property_unflagged_plans_converge(placements in shared_names()) {
        let fs = build(&placements);
        let source_before = tree(&fs, "/src");

        let planned = ReconcileUseCase::new(&fs, &fs)
            .plan(Path::new("/src"), Path::new("/dst"))
            .unwrap();
        let overlaps = find_overlaps(&planned);
        let outcome = reconcile(Path::new("/src"), Path::new("/dst"), &fs, &fs);

        if overlaps.is_empty() {
            prop_assert!(outcome.is_ok());
            prop_assert_eq!(tree(&fs, "/dst"), source_before);
        }
    }
}
