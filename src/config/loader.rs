//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{DirsyncError, DirsyncResult};

use super::types::{Config, FailurePolicy, LogFormat};

/// Config file looked up at the root a driver is pointed at
pub const PROJECT_CONFIG_FILE: &str = ".dirsync.toml";

/// Non-fatal configuration warning, e.g. an unknown key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DirsyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(path, &content)
}

pub(super) fn parse_with_warnings(
    path: &Path,
    content: &str,
) -> DirsyncResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DirsyncError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// A config file that exists but fails to parse is reported and skipped.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    warn!(
                        file = %warning.file.display(),
                        key = %warning.key,
                        suggestion = ?warning.suggestion,
                        "unknown config key"
                    );
                }
                return with_env_overrides(config);
            }
            Err(e) => warn!(file = %candidate.display(), error = %e, "ignoring config file"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (DIRSYNC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub(super) fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // DIRSYNC_DRY_RUN
    if let Some(val) = lookup("DIRSYNC_DRY_RUN") {
        config.sync.dry_run = is_truthy(&val);
    }

    // DIRSYNC_FAILURE_POLICY
    if let Some(policy) = lookup("DIRSYNC_FAILURE_POLICY") {
        config.sync.failure_policy = match policy.to_lowercase().as_str() {
            "continue" => FailurePolicy::Continue,
            _ => FailurePolicy::Abort,
        };
    }

    // DIRSYNC_PARALLEL_HASHING
    if let Some(val) = lookup("DIRSYNC_PARALLEL_HASHING") {
        config.sync.parallel_hashing = is_truthy(&val);
    }

    // DIRSYNC_LOG_LEVEL
    if let Some(level) = lookup("DIRSYNC_LOG_LEVEL") {
        if !level.trim().is_empty() {
            config.logging.level = level;
        }
    }

    // DIRSYNC_LOG_FORMAT
    if let Some(format) = lookup("DIRSYNC_LOG_FORMAT") {
        config.logging.format = match format.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Text,
        };
    }

    config
}

fn is_truthy(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

/// `<config dir>/dirsync/config.toml`
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dirsync").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "sync",
        "dry_run",
        "failure_policy",
        "parallel_hashing",
        "atomic_copies",
        "exclude",
        "logging",
        "level",
        "format",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
