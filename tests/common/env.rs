//! Test environment with a source and a destination tree on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Two isolated temp directories standing in for the trees to reconcile
pub struct TestTrees {
    source: TempDir,
    dest: TempDir,
}

impl TestTrees {
    pub fn new() -> Self {
        Self {
            source: TempDir::new().expect("create source dir"),
            dest: TempDir::new().expect("create dest dir"),
        }
    }

    pub fn source(&self) -> &Path {
        self.source.path()
    }

    pub fn dest(&self) -> &Path {
        self.dest.path()
    }

    /// Write a file under the source root, creating parents
    pub fn write_source(&self, rel: &str, content: &str) -> PathBuf {
        write_file(self.source(), rel, content)
    }

    /// Write a file under the destination root, creating parents
    pub fn write_dest(&self, rel: &str, content: &str) -> PathBuf {
        write_file(self.dest(), rel, content)
    }

    pub fn read_dest(&self, rel: &str) -> Option<String> {
        fs::read_to_string(self.dest().join(rel)).ok()
    }

    /// Relative paths of every regular file under the destination, sorted
    pub fn dest_files(&self) -> Vec<String> {
        list_files(self.dest())
    }

    pub fn source_files(&self) -> Vec<String> {
        list_files(self.source())
    }
}

fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, content).expect("write file");
    path
}

fn list_files(root: &Path) -> Vec<String> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(root).expect("under root");
                out.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    out.sort();
    out
}
