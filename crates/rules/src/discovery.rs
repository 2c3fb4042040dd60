//! Discovery of rule files and reference databases under a normalization root.
//!
//! Layout on disk:
//! - `root/normalization/rules/*.yml` — one rule file per metadata column,
//!   logical name = file stem
//! - `root/normalization/databases/<name>/*.csv` — one directory per
//!   database, logical name = the directory name

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, warn};

/// Subdirectory under the root that holds both categories.
pub const NORMALIZATION_DIR: &str = "normalization";

/// Expected file kind for the extension guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Rule definition, `.yml`.
    Rule,
    /// Reference database table, `.csv`.
    Database,
}

impl FileKind {
    fn extension(self) -> &'static str {
        match self {
            FileKind::Rule => "yml",
            FileKind::Database => "csv",
        }
    }
}

/// Enumerate files of one category and derive a logical name per file.
///
/// `category` is `"rules"` or `"databases"`; any other tag yields an empty
/// map with no error. That permissive fallback mirrors longstanding caller
/// expectations; tightening it to an error would change the contract.
/// Entries are ordered by sorted path so repeated scans are deterministic.
pub fn discover_paths(root: &Path, category: &str) -> IndexMap<String, PathBuf> {
    let mut paths = IndexMap::new();
    let base = root.join(NORMALIZATION_DIR).join(category);

    match category {
        "rules" => {
            for path in sorted_files(&base) {
                if path.extension().and_then(|e| e.to_str()) != Some("yml") {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    paths.insert(stem.to_string(), path);
                }
            }
        }
        "databases" => {
            for dir in sorted_dirs(&base) {
                let Some(name) = dir.file_name().and_then(|n| n.to_str()).map(str::to_string)
                else {
                    continue;
                };
                for path in sorted_files(&dir) {
                    if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                        continue;
                    }
                    // Several CSVs in one directory: the last one wins.
                    paths.insert(name.clone(), path);
                }
            }
        }
        other => {
            debug!(category = other, "unrecognized path category, returning no paths");
        }
    }

    paths
}

/// Check a path against the expected extension for its kind.
///
/// On mismatch a diagnostic is logged and `false` is returned; callers must
/// treat `false` as "skip this file", never as a fatal error.
pub fn check_extension(path: &Path, kind: FileKind) -> bool {
    let expected = kind.extension();
    let matches = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == expected)
        .unwrap_or(false);

    if !matches {
        warn!(path = %path.display(), expected, "incorrect file extension");
    }
    matches
}

/// Regular files directly under `dir`, sorted by path. Missing or unreadable
/// directories yield no entries.
fn sorted_files(dir: &Path) -> Vec<PathBuf> {
    sorted_entries(dir, |p| p.is_file())
}

/// Subdirectories directly under `dir`, sorted by path.
fn sorted_dirs(dir: &Path) -> Vec<PathBuf> {
    sorted_entries(dir, |p| p.is_dir())
}

fn sorted_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(path = %dir.display(), error = %e, "directory not readable");
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| keep(p))
        .collect();
    paths.sort();
    paths
}
