//! Exclude patterns for inventory scans
//!
//! Patterns use gitignore syntax and are anchored at whichever root is
//! being scanned, so one pattern set serves both the source and the
//! destination tree.

use std::fmt;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Validated exclude pattern lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludePatterns {
    lines: Vec<String>,
}

impl ExcludePatterns {
    /// Pattern set that excludes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate and keep `patterns`. Blank lines and `#` comments are dropped.
    pub fn new<I, S>(patterns: I) -> Result<Self, ExcludeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty() && !p.starts_with('#'))
            .collect();

        if lines.len() > MAX_PATTERNS {
            return Err(ExcludeError::TooManyPatterns {
                count: lines.len(),
                limit: MAX_PATTERNS,
            });
        }

        let set = Self { lines };
        // Compile once up front so syntax errors surface at construction.
        set.matcher_for(Path::new(""))?;
        Ok(set)
    }

    /// Build a matcher anchored at `root`
    pub fn matcher_for(&self, root: &Path) -> Result<ExcludeMatcher, ExcludeError> {
        if self.lines.is_empty() {
            return Ok(ExcludeMatcher::none(root));
        }
        let mut builder = GitignoreBuilder::new(root);
        for line in &self.lines {
            builder
                .add_line(None, line)
                .map_err(|e| ExcludeError::InvalidPattern {
                    pattern: line.clone(),
                    message: e.to_string(),
                })?;
        }
        let matcher = builder
            .build()
            .map_err(|e| ExcludeError::BuildFailed(e.to_string()))?;
        Ok(ExcludeMatcher {
            root: root.to_path_buf(),
            matcher: Some(matcher),
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Exclude matcher bound to one scan root
#[derive(Debug, Clone)]
pub struct ExcludeMatcher {
    root: PathBuf,
    matcher: Option<Gitignore>,
}

impl ExcludeMatcher {
    fn none(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            matcher: None,
        }
    }

    /// Check whether `path` (under the root) or one of its parents is excluded
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        let Some(matcher) = &self.matcher else {
            return false;
        };
        let Ok(rel) = path.strip_prefix(&self.root) else {
            return false;
        };
        matcher.matched_path_or_any_parents(rel, is_dir).is_ignore()
    }
}

/// Errors raised while compiling exclude patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcludeError {
    /// Too many patterns configured
    TooManyPatterns { count: usize, limit: usize },
    /// A pattern has invalid syntax
    InvalidPattern { pattern: String, message: String },
    /// Failed to build the gitignore matcher
    BuildFailed(String),
}

impl fmt::Display for ExcludeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPatterns { count, limit } => {
                write!(f, "{} exclude patterns configured, limit is {}", count, limit)
            }
            Self::InvalidPattern { pattern, message } => {
                write!(f, "invalid exclude pattern '{}': {}", pattern, message)
            }
            Self::BuildFailed(msg) => write!(f, "failed to build exclude matcher: {}", msg),
        }
    }
}

impl std::error::Error for ExcludeError {}
