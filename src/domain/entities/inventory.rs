//! Inventory entity - the content set of one directory tree
//!
//! An inventory maps each distinct content hash to exactly one name
//! relative to the tree's root. Iteration follows insertion order.
//!
//! Names keep their subdirectory components (`docs/notes.md`), so a tree
//! is one flat namespace of relative paths. Reducing names to bare file
//! names would let nested files collide and point copies at paths that do
//! not exist under the source root.
//!
//! When a tree holds several files with identical bytes only one name
//! survives: a later insert for the same hash replaces the name but keeps
//! the entry where it was first seen.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Content hash → relative name, insertion ordered and key-unique
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: Vec<(ContentHash, PathBuf)>,
    index: HashMap<ContentHash, usize>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` for `hash`.
    ///
    /// Returns the name previously recorded for the same content, if any.
    pub fn insert(&mut self, hash: ContentHash, name: impl Into<PathBuf>) -> Option<PathBuf> {
        let name = name.into();
        match self.index.get(&hash) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, name)),
            None => {
                self.index.insert(hash, self.entries.len());
                self.entries.push((hash, name));
                None
            }
        }
    }

    /// Name recorded for `hash`
    pub fn get(&self, hash: &ContentHash) -> Option<&Path> {
        self.index
            .get(hash)
            .map(|&slot| self.entries[slot].1.as_path())
    }

    pub fn contains(&self, hash: &ContentHash) -> bool {
        self.index.contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|(_, name)| name.as_path())
    }
}

/// Two inventories are equal when they hold the same hash → name pairs,
/// whatever order those pairs were inserted in.
impl PartialEq for Inventory {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(hash, name)| other.get(hash) == Some(name))
    }
}

impl Eq for Inventory {}

impl<N: Into<PathBuf>> FromIterator<(ContentHash, N)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (ContentHash, N)>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        inventory.extend(iter);
        inventory
    }
}

impl<N: Into<PathBuf>> Extend<(ContentHash, N)> for Inventory {
    fn extend<I: IntoIterator<Item = (ContentHash, N)>>(&mut self, iter: I) {
        for (hash, name) in iter {
            self.insert(hash, name);
        }
    }
}

/// Borrowing iterator over inventory entries
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (ContentHash, PathBuf)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a ContentHash, &'a Path);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(hash, name)| (hash, name.as_path()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Inventory {
    type Item = (&'a ContentHash, &'a Path);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
