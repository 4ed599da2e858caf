//! InventoryReader port - builds the content inventory of one tree

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::Inventory;

/// Failure while reading a tree. A partial inventory is never returned.
#[derive(Error, Debug)]
pub enum ReadError {
    /// Root is missing, not a directory, or cannot be listed
    #[error("cannot read root {root}: {source}")]
    RootUnreadable { root: PathBuf, source: io::Error },

    /// A file was listed but had disappeared by the time it was hashed
    #[error("file vanished during scan: {path}")]
    Vanished { path: PathBuf },

    /// Any other I/O failure while hashing a file
    #[error("failed to hash {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    /// The directory walker reported an error
    #[error("failed to walk {root}: {message}")]
    Walk { root: PathBuf, message: String },
}

impl ReadError {
    /// Classify an I/O error raised while hashing `path`
    pub fn hashing(err: io::Error, path: &Path) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            ReadError::Vanished {
                path: path.to_path_buf(),
            }
        } else {
            ReadError::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Produces an [`Inventory`] for a directory root.
///
/// Implementations:
/// - `LocalFs` - walks and hashes the local disk
/// - `MemoryFs` - in-memory tree for testing
pub trait InventoryReader {
    /// Hash every regular file under `root`, keyed by content
    fn read_inventory(&self, root: &Path) -> Result<Inventory, ReadError>;
}

impl<T: InventoryReader + ?Sized> InventoryReader for &T {
    fn read_inventory(&self, root: &Path) -> Result<Inventory, ReadError> {
        (**self).read_inventory(root)
    }
}
