//! Implementation of the `subreal clean` command.
//!
//! Deletes disposable build and cache artifacts from the project:
//! - Temporary and cache directories (Binaries, Intermediate, DDC, ...)
//! - Build artifacts (object files, pdb, logs)
//! - Engine-generated folders under Saved
//!
//! # Safety
//!
//! - Default behavior is dry-run (prints what would be removed)
//! - Requires `--yes` to actually perform deletions
//! - Only categories flagged safe are ever deleted; IDE files and VCS
//!   artifacts are reported but refused even when named with `--category`
//! - Every entry is re-checked right before deletion

mod display;
mod execution;
mod planning;
mod types;


use super::{load_config, require_project_dir};
use crate::cleaner::Cleaner;
use crate::cli::CleanArgs;
use crate::error::Result;
use std::path::Path;

use display::{print_clean_plan, print_clean_summary};
use execution::execute_clean;
use planning::build_clean_plan;

/// Execute the `subreal clean` command.
///
/// # Behavior
///
/// - Without `--yes`: dry-run mode, prints what would be removed
/// - With `--yes`: writes the manifest (with `--manifest`), deletes the
///   selected categories, then prunes empty directories unless
///   `--no-empty-dirs` is given
/// - `--category`: restrict to the named safe categories
pub fn cmd_clean(config_path: &Path, args: CleanArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let project_dir = require_project_dir(&config)?;
    let cleaner = Cleaner::new(&project_dir)?;

    let plan = build_clean_plan(&cleaner, &args)?;

    if plan.is_empty() {
        println!("No cleanup candidates found.");
        if args.yes && !args.no_empty_dirs {
            let removed = cleaner.clean_empty_directories();
            if removed > 0 {
                println!("Removed {} empty director(ies).", removed);
            }
        }
        return Ok(());
    }

    print_clean_plan(&cleaner, &plan);

    if !args.yes {
        println!();
        println!("Dry-run mode: no changes made.");
        println!("Run with --yes to perform the cleanup.");
        return Ok(());
    }

    let summary = execute_clean(&cleaner, &plan, &args)?;
    print_clean_summary(&cleaner, &summary);

    Ok(())
}
