//! Local File System Implementation
//!
//! Implements the InventoryReader and ActionExecutor ports for local disk
//! operations.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::config::SyncConfig;
use crate::domain::entities::Inventory;
use crate::domain::ports::{ActionExecutor, FsError, FsResult, InventoryReader, ReadError};
use crate::domain::value_objects::ContentHash;

use super::exclude::{ExcludeError, ExcludePatterns};

/// Local file system implementation
///
/// Walks trees recursively, hashes files in fixed-size chunks, and applies
/// actions with plain syscalls. Copies go through a temp file in the target
/// directory and are renamed into place when `atomic_copies` is set.
#[derive(Debug, Clone)]
pub struct LocalFs {
    excludes: ExcludePatterns,
    parallel_hashing: bool,
    atomic_copies: bool,
}

impl Default for LocalFs {
    fn default() -> Self {
        Self {
            excludes: ExcludePatterns::empty(),
            parallel_hashing: false,
            atomic_copies: true,
        }
    }
}

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `[sync]` section of the configuration
    pub fn from_config(config: &SyncConfig) -> Result<Self, ExcludeError> {
        Ok(Self {
            excludes: ExcludePatterns::new(&config.exclude)?,
            parallel_hashing: config.parallel_hashing,
            atomic_copies: config.atomic_copies,
        })
    }

    pub fn with_excludes(mut self, excludes: ExcludePatterns) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn with_parallel_hashing(mut self, parallel: bool) -> Self {
        self.parallel_hashing = parallel;
        self
    }

    pub fn with_atomic_copies(mut self, atomic: bool) -> Self {
        self.atomic_copies = atomic;
        self
    }

    /// Regular files under `root` as (absolute, relative) pairs, in walk order
    fn list_files(&self, root: &Path) -> Result<Vec<(PathBuf, PathBuf)>, ReadError> {
        let unreadable = |source: io::Error| ReadError::RootUnreadable {
            root: root.to_path_buf(),
            source,
        };
        let metadata = fs::metadata(root).map_err(unreadable)?;
        if !metadata.is_dir() {
            return Err(unreadable(io::Error::other("not a directory")));
        }
        fs::read_dir(root).map_err(unreadable)?;

        let matcher = self
            .excludes
            .matcher_for(root)
            .map_err(|e| ReadError::Walk {
                root: root.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                // Excluded directories are pruned whole, not walked.
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                let excluded = matcher.is_excluded(entry.path(), is_dir);
                if excluded {
                    trace!(path = %entry.path().display(), "excluded");
                }
                !excluded
            });

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry.map_err(|e| ReadError::Walk {
                root: root.to_path_buf(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.into_path();
            let rel = match path.strip_prefix(root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => continue,
            };
            files.push((path, rel));
        }
        Ok(files)
    }

    fn copy_atomic(&self, src: &Path, dst: &Path, parent: &Path) -> FsResult<()> {
        let mut reader = File::open(src).map_err(|e| FsError::from_io(e, src))?;
        let permissions = reader
            .metadata()
            .map_err(|e| FsError::from_io(e, src))?
            .permissions();

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(e, parent))?;
        io::copy(&mut reader, tmp.as_file_mut()).map_err(|e| FsError::from_io(e, dst))?;
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| FsError::from_io(e, dst))?;
        tmp.persist(dst)
            .map_err(|e| FsError::from_io(e.error, dst))?;
        Ok(())
    }
}

/// Compute the content hash of a file, streaming it in chunks
pub fn hash_file(path: &Path) -> io::Result<ContentHash> {
    ContentHash::from_reader(File::open(path)?)
}

impl InventoryReader for LocalFs {
    fn read_inventory(&self, root: &Path) -> Result<Inventory, ReadError> {
        let files = self.list_files(root)?;
        let hash_one = |path: &PathBuf| hash_file(path).map_err(|e| ReadError::hashing(e, path));

        let hashes: Vec<ContentHash> = if self.parallel_hashing {
            files
                .par_iter()
                .map(|(path, _)| hash_one(path))
                .collect::<Result<_, _>>()?
        } else {
            files
                .iter()
                .map(|(path, _)| hash_one(path))
                .collect::<Result<_, _>>()?
        };

        let mut inventory = Inventory::new();
        for ((_, rel), hash) in files.into_iter().zip(hashes) {
            if let Some(previous) = inventory.insert(hash, rel) {
                debug!(
                    hash = %hash.short(),
                    dropped = %previous.display(),
                    "duplicate content, keeping last-seen name"
                );
            }
        }
        debug!(root = %root.display(), entries = inventory.len(), "inventory read");
        Ok(inventory)
    }
}

impl ActionExecutor for LocalFs {
    fn copy(&self, src: &Path, dst: &Path) -> FsResult<()> {
        if !src.is_file() {
            return Err(FsError::NotFound(src.to_path_buf()));
        }
        let parent = ensure_parent(dst)?;
        if self.atomic_copies {
            self.copy_atomic(src, dst, &parent)
        } else {
            fs::copy(src, dst)
                .map(|_| ())
                .map_err(|e| FsError::from_io(e, dst))
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        fs::symlink_metadata(from).map_err(|e| FsError::from_io(e, from))?;
        ensure_parent(to)?;
        fs::rename(from, to).map_err(|e| FsError::from_io(e, to))
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::from_io(e, path))
    }
}

/// Create the parent directory of `path` if needed and return it
fn ensure_parent(path: &Path) -> FsResult<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| FsError::from_io(e, &parent))?;
    Ok(parent)
}
