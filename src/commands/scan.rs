//! `subreal scan`: report cleanable files without deleting anything.

use super::{load_config, require_project_dir};
use crate::cleaner::{Cleaner, ScanResult, format_size};
use crate::cli::ScanArgs;
use crate::error::Result;
use std::path::Path;

/// Entries listed per category with `--details`.
const PREVIEW_LIMIT: usize = 10;

pub fn cmd_scan(config_path: &Path, args: ScanArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let project_dir = require_project_dir(&config)?;

    let cleaner = Cleaner::new(&project_dir)?;
    let scan = cleaner.scan();

    println!("Scan of {}:", project_dir.display());
    println!();
    print_scan_summary(&cleaner, &scan, args.details);

    Ok(())
}

/// Per-category table, optionally followed by a preview of each category.
pub(super) fn print_scan_summary(cleaner: &Cleaner, scan: &ScanResult, details: bool) {
    for (category, found) in scan.iter() {
        let safety = if cleaner.is_safe(category) {
            "safe"
        } else {
            "caution"
        };
        println!(
            "  {:<48} {:>7} item(s) {:>10}  [{}]",
            cleaner.category_description(category),
            found.count(),
            format_size(found.total_size),
            safety
        );
    }
    println!();
    println!(
        "  Total: {} item(s), {}",
        scan.total_count(),
        format_size(scan.total_size())
    );

    if !details {
        return;
    }

    for (category, found) in scan.iter() {
        if found.is_empty() {
            continue;
        }
        println!();
        println!("{}:", cleaner.category_description(category));
        for entry in found.entries.iter().take(PREVIEW_LIMIT) {
            println!(
                "  - {} ({}, {})",
                make_relative(&entry.path, cleaner.project_root()),
                entry.kind,
                format_size(entry.size)
            );
        }
        if found.count() > PREVIEW_LIMIT {
            println!("  ... and {} more", found.count() - PREVIEW_LIMIT);
        }
    }
}

/// Make a path relative to the project directory for display.
pub(super) fn make_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}
