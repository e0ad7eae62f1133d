//! Data types for the clean command.

use crate::cleaner::{CleanReport, CleanupCategory, ScanResult};
use std::path::PathBuf;

/// What a clean run is going to delete.
#[derive(Debug)]
pub struct CleanPlan {
    /// Categories that will be deleted, in category order.
    pub categories: Vec<CleanupCategory>,
    /// Fresh scan of the whole project.
    pub scan: ScanResult,
}

impl CleanPlan {
    /// Number of entries in the selected categories.
    pub fn selected_count(&self) -> usize {
        self.categories
            .iter()
            .filter_map(|c| self.scan.get(*c))
            .map(|found| found.count())
            .sum()
    }

    /// Bytes in the selected categories.
    pub fn selected_size(&self) -> u64 {
        self.categories
            .iter()
            .filter_map(|c| self.scan.get(*c))
            .map(|found| found.total_size)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }
}

/// Outcome of a clean run.
#[derive(Debug, Default)]
pub struct CleanSummary {
    /// Manifest written before deleting, if requested.
    pub manifest: Option<PathBuf>,
    /// Report per cleaned category.
    pub reports: Vec<(CleanupCategory, CleanReport)>,
    /// Empty directories pruned afterwards.
    pub empty_dirs_removed: usize,
}

impl CleanSummary {
    pub fn removed_count(&self) -> usize {
        self.reports.iter().map(|(_, r)| r.removed_count).sum()
    }

    pub fn removed_bytes(&self) -> u64 {
        self.reports.iter().map(|(_, r)| r.removed_bytes).sum()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &(PathBuf, String)> {
        self.reports.iter().flat_map(|(_, r)| r.skipped.iter())
    }
}
