//! Project cleaner: finds and removes disposable build and cache artifacts.
//!
//! The cleaner walks a project directory once per scan, classifies every path
//! into the fixed [`CleanupCategory`] set via glob patterns, and measures each
//! match (file size, or recursive size for directories).
//!
//! # Staleness
//!
//! A [`ScanResult`] is a snapshot. Nothing invalidates it when the tree
//! changes, so [`Cleaner::clean_category`] re-checks every entry before
//! deleting it and treats vanished entries as already gone.
//!
//! # Failure policy
//!
//! Per-entry I/O errors never abort a scan or a clean. They are logged at
//! debug level and, for cleaning, collected in [`CleanReport::skipped`].
//!
//! # Safety
//!
//! `clean_category` deletes whatever it is given. Restricting deletion to
//! categories where [`Cleaner::is_safe`] holds is the caller's job.

mod category;
mod clean;
mod manifest;
mod patterns;
mod scan;
mod size;

#[cfg(test)]
mod tests;

pub use category::{CleanupCategory, describe_category_id};
pub use clean::{CleanReport, EntryOutcome};
pub use scan::{CategoryScan, EntryKind, ScanEntry, ScanResult};
pub use size::format_size;

use crate::error::Result;
use patterns::CategoryRules;
use std::path::{Path, PathBuf};

/// Scanner and cleaner bound to one project directory.
#[derive(Debug)]
pub struct Cleaner {
    project_root: PathBuf,
    rules: Vec<CategoryRules>,
}

impl Cleaner {
    /// Create a cleaner for the project directory at `project_root`.
    ///
    /// Only compiles the category patterns; the directory is not touched
    /// until [`Cleaner::scan`].
    pub fn new<P: AsRef<Path>>(project_root: P) -> Result<Self> {
        let rules = CleanupCategory::ALL
            .into_iter()
            .map(CategoryRules::for_category)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            project_root: project_root.as_ref().to_path_buf(),
            rules,
        })
    }

    /// The project directory this cleaner operates on.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Whether a category can be deleted without losing work.
    pub fn is_safe(&self, category: CleanupCategory) -> bool {
        self.rules
            .iter()
            .find(|rules| rules.category == category)
            .is_some_and(|rules| rules.safe)
    }

    /// Human-readable label for a category.
    pub fn category_description(&self, category: CleanupCategory) -> &'static str {
        category.description()
    }
}
