//! Scanning: match the project tree against every category.

use super::Cleaner;
use super::category::CleanupCategory;
use super::patterns::to_match_path;
use crate::fs::dir_size;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether a scan entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "directory"),
        }
    }
}

/// One matched path with its size at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    /// Absolute (or root-joined) path of the match.
    pub path: PathBuf,
    /// File size, or the recursive size of all files below a directory.
    pub size: u64,
    pub kind: EntryKind,
}

/// Matches for one category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryScan {
    pub entries: Vec<ScanEntry>,
    pub total_size: u64,
}

impl CategoryScan {
    /// Number of recorded entries (duplicates included).
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: ScanEntry) {
        self.total_size += entry.size;
        self.entries.push(entry);
    }
}

/// Result of one scan, keyed by category in declaration order.
///
/// Entries are not deduplicated: a path matched by two patterns of the same
/// category appears twice and is counted twice in `total_size`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    pub categories: BTreeMap<CleanupCategory, CategoryScan>,
}

impl ScanResult {
    /// Matches for a category (empty if it was not scanned).
    pub fn get(&self, category: CleanupCategory) -> Option<&CategoryScan> {
        self.categories.get(&category)
    }

    /// Iterate categories in order.
    pub fn iter(&self) -> impl Iterator<Item = (CleanupCategory, &CategoryScan)> {
        self.categories.iter().map(|(category, scan)| (*category, scan))
    }

    /// Total entries across all categories.
    pub fn total_count(&self) -> usize {
        self.categories.values().map(CategoryScan::count).sum()
    }

    /// Total bytes across all categories.
    pub fn total_size(&self) -> u64 {
        self.categories.values().map(|scan| scan.total_size).sum()
    }

    /// Whether nothing matched at all.
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(CategoryScan::is_empty)
    }
}

/// A walked path, prepared for matching.
struct Candidate {
    path: PathBuf,
    match_path: String,
    is_dir: bool,
}

impl Cleaner {
    /// Scan the project directory and classify every matching path.
    ///
    /// Paths that cannot be read or measured are skipped. The project
    /// directory itself is never a match.
    pub fn scan(&self) -> ScanResult {
        let candidates = collect_candidates(&self.project_root);
        log::debug!(
            "Scanning {} path(s) under {}",
            candidates.len(),
            self.project_root.display()
        );

        let mut result = ScanResult::default();

        for rules in &self.rules {
            let mut category_scan = CategoryScan::default();

            for pattern in &rules.patterns {
                for candidate in &candidates {
                    if !pattern.matches(&candidate.match_path, candidate.is_dir) {
                        continue;
                    }

                    match measure(&candidate.path) {
                        Some(entry) => category_scan.push(entry),
                        None => log::debug!(
                            "Skipping {} ({}): no longer accessible",
                            candidate.path.display(),
                            pattern.as_str()
                        ),
                    }
                }
            }

            result.categories.insert(rules.category, category_scan);
        }

        result
    }
}

fn collect_candidates(root: &Path) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable path during scan: {}", e);
                continue;
            }
        };

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };

        candidates.push(Candidate {
            match_path: to_match_path(relative),
            path: entry.path().to_path_buf(),
            is_dir: entry.file_type().is_dir(),
        });
    }

    candidates
}

/// Classify and size a path, or `None` if it vanished or cannot be read.
fn measure(path: &Path) -> Option<ScanEntry> {
    let metadata = fs::metadata(path).ok()?;

    if metadata.is_file() {
        Some(ScanEntry {
            path: path.to_path_buf(),
            size: metadata.len(),
            kind: EntryKind::File,
        })
    } else if metadata.is_dir() {
        Some(ScanEntry {
            path: path.to_path_buf(),
            size: dir_size(path),
            kind: EntryKind::Directory,
        })
    } else {
        None
    }
}
