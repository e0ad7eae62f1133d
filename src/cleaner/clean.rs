//! Deletion of scanned entries and empty-directory pruning.

use super::Cleaner;
use super::category::CleanupCategory;
use super::scan::{EntryKind, ScanEntry};
use crate::fs::is_dir_empty;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Directories whose insides are never pruned.
const VCS_METADATA_DIRS: &[&str] = &[".git", ".svn", ".hg", ".p4root"];

/// What happened to one entry during a clean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Deleted; carries the size recorded at scan time.
    Removed(u64),
    /// Already gone when the clean reached it.
    Missing,
    /// Deletion failed; carries the OS error text.
    Skipped(String),
}

/// Summary of a [`Cleaner::clean_category`] call.
#[derive(Debug, Default)]
pub struct CleanReport {
    /// Number of entries deleted.
    pub removed_count: usize,
    /// Sum of scan-time sizes of deleted entries.
    pub removed_bytes: u64,
    /// Entries that no longer existed.
    pub missing_count: usize,
    /// Entries that could not be deleted, with reasons.
    pub skipped: Vec<(PathBuf, String)>,
}

impl CleanReport {
    /// `(deleted_count, deleted_bytes)`.
    pub fn totals(&self) -> (usize, u64) {
        (self.removed_count, self.removed_bytes)
    }

    fn record(&mut self, entry: &ScanEntry, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::Removed(bytes) => {
                self.removed_count += 1;
                self.removed_bytes += bytes;
            }
            EntryOutcome::Missing => self.missing_count += 1,
            EntryOutcome::Skipped(reason) => self.skipped.push((entry.path.clone(), reason)),
        }
    }
}

/// Delete one entry if it still exists.
pub fn remove_entry(entry: &ScanEntry) -> EntryOutcome {
    if fs::symlink_metadata(&entry.path).is_err() {
        return EntryOutcome::Missing;
    }

    let result = match entry.kind {
        EntryKind::File => fs::remove_file(&entry.path),
        EntryKind::Directory => fs::remove_dir_all(&entry.path),
    };

    match result {
        Ok(()) => EntryOutcome::Removed(entry.size),
        Err(e) => EntryOutcome::Skipped(e.to_string()),
    }
}

impl Cleaner {
    /// Delete every entry that still exists.
    ///
    /// Never aborts: missing entries are counted separately and failures are
    /// collected in [`CleanReport::skipped`]. Does not check
    /// [`Cleaner::is_safe`].
    pub fn clean_category(&self, category: CleanupCategory, entries: &[ScanEntry]) -> CleanReport {
        let mut report = CleanReport::default();

        for entry in entries {
            let outcome = remove_entry(entry);
            if let EntryOutcome::Skipped(reason) = &outcome {
                log::debug!(
                    "[{}] could not remove {}: {}",
                    category,
                    entry.path.display(),
                    reason
                );
            }
            report.record(entry, outcome);
        }

        log::debug!(
            "[{}] removed {} entr(ies), {} missing, {} skipped",
            category,
            report.removed_count,
            report.missing_count,
            report.skipped.len()
        );

        report
    }

    /// Remove empty directories below the project directory, deepest first.
    ///
    /// A directory that only becomes empty once its empty children are gone is
    /// removed in the same call. The project directory itself and the insides
    /// of version-control metadata directories are left alone.
    pub fn clean_empty_directories(&self) -> usize {
        let mut removed = 0;

        let walker = WalkDir::new(&self.project_root)
            .min_depth(1)
            .contents_first(true)
            .into_iter()
            .filter_entry(|entry| {
                !(entry.file_type().is_dir()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| VCS_METADATA_DIRS.contains(&name)))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("Skipping unreadable path while pruning: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            match is_dir_empty(entry.path()) {
                Ok(true) => match fs::remove_dir(entry.path()) {
                    Ok(()) => removed += 1,
                    Err(e) => log::debug!(
                        "Could not remove empty directory {}: {}",
                        entry.path().display(),
                        e
                    ),
                },
                Ok(false) => {}
                Err(e) => log::debug!("Could not read {}: {}", entry.path().display(), e),
            }
        }

        removed
    }
}
