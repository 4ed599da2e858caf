//! In-memory file system
//!
//! A test double for both ports. Files live in a sorted map keyed by
//! absolute path, every applied action is journaled, and individual paths
//! can be made to fail so callers can exercise their error handling.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::entities::{Inventory, PlannedAction};
use crate::domain::ports::{ActionExecutor, FsError, FsResult, InventoryReader, ReadError};
use crate::domain::value_objects::ContentHash;

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    denied: BTreeSet<PathBuf>,
    journal: Vec<PlannedAction>,
}

impl State {
    fn add_dir_chain(&mut self, dir: &Path) {
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn check_allowed(&self, path: &Path) -> FsResult<()> {
        if self.denied.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        Ok(())
    }
}

/// Cloneable handle to a shared in-memory tree
///
/// Uses `Arc<Mutex<>>` internally so a clone can be handed to a driver
/// while the test keeps another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    state: Arc<Mutex<State>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryFs::write`]
    pub fn with_file(self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        self.write(path, content);
        self
    }

    /// Builder form of [`MemoryFs::create_dir`]
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.create_dir(path);
        self
    }

    /// Create or overwrite a file, creating its parent directories
    pub fn write(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let mut state = self.state.lock();
        if let Some(parent) = path.parent() {
            state.add_dir_chain(parent);
        }
        state
            .files
            .insert(path.to_path_buf(), content.as_ref().to_vec());
    }

    /// Create a directory and its ancestors
    pub fn create_dir(&self, path: impl AsRef<Path>) {
        self.state.lock().add_dir_chain(path.as_ref());
    }

    /// Make every operation touching `path` fail with permission denied
    pub fn deny(&self, path: impl AsRef<Path>) {
        self.state.lock().denied.insert(path.as_ref().to_path_buf());
    }

    /// Remove a file behind the executor's back
    pub fn unlink(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().files.remove(path.as_ref()).is_some()
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.state.lock().files.get(path.as_ref()).cloned()
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().files.contains_key(path.as_ref())
    }

    /// All file paths, sorted
    pub fn files(&self) -> Vec<PathBuf> {
        self.state.lock().files.keys().cloned().collect()
    }

    /// Actions successfully applied so far, in order
    pub fn journal(&self) -> Vec<PlannedAction> {
        self.state.lock().journal.clone()
    }
}

impl InventoryReader for MemoryFs {
    fn read_inventory(&self, root: &Path) -> Result<Inventory, ReadError> {
        let state = self.state.lock();
        if !state.dirs.contains(root) {
            return Err(ReadError::RootUnreadable {
                root: root.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
            });
        }
        if state.denied.contains(root) {
            return Err(ReadError::RootUnreadable {
                root: root.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }

        let mut inventory = Inventory::new();
        for (path, content) in &state.files {
            let Ok(rel) = path.strip_prefix(root) else {
                continue;
            };
            if state.denied.contains(path) {
                return Err(ReadError::Io {
                    path: path.clone(),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
                });
            }
            inventory.insert(ContentHash::from_bytes(content), rel);
        }
        Ok(inventory)
    }
}

impl ActionExecutor for MemoryFs {
    fn copy(&self, src: &Path, dst: &Path) -> FsResult<()> {
        let mut state = self.state.lock();
        state.check_allowed(src)?;
        state.check_allowed(dst)?;
        let content = state
            .files
            .get(src)
            .cloned()
            .ok_or_else(|| FsError::NotFound(src.to_path_buf()))?;
        if let Some(parent) = dst.parent() {
            state.add_dir_chain(parent);
        }
        state.files.insert(dst.to_path_buf(), content);
        state.journal.push(PlannedAction::copy(src, dst));
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        let mut state = self.state.lock();
        state.check_allowed(from)?;
        state.check_allowed(to)?;
        let content = state
            .files
            .remove(from)
            .ok_or_else(|| FsError::NotFound(from.to_path_buf()))?;
        if let Some(parent) = to.parent() {
            state.add_dir_chain(parent);
        }
        state.files.insert(to.to_path_buf(), content);
        state.journal.push(PlannedAction::rename(from, to));
        Ok(())
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let mut state = self.state.lock();
        state.check_allowed(path)?;
        state
            .files
            .remove(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
        state.journal.push(PlannedAction::delete(path));
        Ok(())
    }
}
