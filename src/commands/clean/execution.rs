//! Execution of the clean command.

use super::types::{CleanPlan, CleanSummary};
use crate::cleaner::Cleaner;
use crate::cli::CleanArgs;
use crate::error::Result;

/// Delete the planned categories.
///
/// A manifest failure aborts before anything is deleted. Per-entry failures
/// end up in the category reports.
pub fn execute_clean(cleaner: &Cleaner, plan: &CleanPlan, args: &CleanArgs) -> Result<CleanSummary> {
    let mut summary = CleanSummary::default();

    if args.manifest {
        summary.manifest = Some(cleaner.write_backup_manifest(&plan.scan)?);
    }

    for category in &plan.categories {
        let Some(found) = plan.scan.get(*category) else {
            continue;
        };
        if found.is_empty() {
            continue;
        }

        let report = cleaner.clean_category(*category, &found.entries);
        log::info!(
            "Cleaned {}: {} removed, {} already gone, {} skipped",
            category,
            report.removed_count,
            report.missing_count,
            report.skipped.len()
        );
        summary.reports.push((*category, report));
    }

    if !args.no_empty_dirs {
        summary.empty_dirs_removed = cleaner.clean_empty_directories();
    }

    Ok(summary)
}
