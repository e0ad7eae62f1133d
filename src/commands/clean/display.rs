//! Display and formatting utilities for clean command output.

use super::types::{CleanPlan, CleanSummary};
use crate::cleaner::{Cleaner, CleanupCategory, format_size};
use crate::commands::scan::{make_relative, print_scan_summary};

/// Print the scan table and which categories will be deleted.
pub fn print_clean_plan(cleaner: &Cleaner, plan: &CleanPlan) {
    println!("Cleanup plan for {}:", cleaner.project_root().display());
    println!();
    print_scan_summary(cleaner, &plan.scan, false);
    println!();

    println!("Will delete:");
    for category in &plan.categories {
        if let Some(found) = plan.scan.get(*category)
            && !found.is_empty()
        {
            println!(
                "  - {} ({} item(s), {})",
                cleaner.category_description(*category),
                found.count(),
                format_size(found.total_size)
            );
        }
    }
    println!(
        "  = {} item(s), {}",
        plan.selected_count(),
        format_size(plan.selected_size())
    );

    let left_alone: Vec<CleanupCategory> = CleanupCategory::ALL
        .into_iter()
        .filter(|c| !cleaner.is_safe(*c))
        .filter(|c| plan.scan.get(*c).is_some_and(|found| !found.is_empty()))
        .collect();
    if !left_alone.is_empty() {
        println!();
        println!("Left alone (review by hand):");
        for category in left_alone {
            println!("  - {}", cleaner.category_description(category));
        }
    }
}

/// Print what a clean run did.
pub fn print_clean_summary(cleaner: &Cleaner, summary: &CleanSummary) {
    println!();
    if let Some(manifest) = &summary.manifest {
        println!("Manifest written: {}", manifest.display());
    }

    println!("Cleanup complete:");
    println!(
        "  Removed: {} item(s), {}",
        summary.removed_count(),
        format_size(summary.removed_bytes())
    );
    if summary.empty_dirs_removed > 0 {
        println!(
            "  Removed {} empty director(ies)",
            summary.empty_dirs_removed
        );
    }

    let skipped: Vec<_> = summary.skipped().collect();
    if !skipped.is_empty() {
        println!("  Skipped: {} item(s)", skipped.len());
        for (path, reason) in skipped {
            println!(
                "    - {}: {}",
                make_relative(path, cleaner.project_root()),
                reason
            );
        }
    }
}
