//! Implementation of the `subreal rename` command.
//!
//! Runs one rename transaction:
//! detect -> validate -> backup -> rename files -> move directory.
//!
//! # Safety
//!
//! - Default behavior is a preview; `--yes` performs the rename
//! - Nothing is modified until the backup copy has fully succeeded
//! - Any failed step restores the backup unless `--no-rollback` is given
//! - The backup of a successful rename is kept on disk

mod display;


use super::project::print_validation;
use super::{load_config, require_project_dir};
use crate::cli::RenameArgs;
use crate::error::{Result, SubrealError};
use crate::renamer::Renamer;
use std::path::Path;

use display::{print_rename_preview, print_rename_result};

/// Execute the `subreal rename` command.
pub fn cmd_rename(config_path: &Path, args: RenameArgs) -> Result<()> {
    let mut config = load_config(config_path)?;
    require_project_dir(&config)?;

    let new_name = args.new_name.trim().to_string();
    let mut renamer = Renamer::new(config.project_root_path(), &config.project_name);

    let info = renamer.detect_project_type();
    if let Some(error) = info.error {
        return Err(SubrealError::UserError(error));
    }

    let validation = renamer.validate_new_name(&new_name);
    print_validation(&validation);
    if !validation.valid {
        return Err(SubrealError::ValidationError(validation.errors.join("; ")));
    }

    print_rename_preview(&renamer, &info, &new_name);

    if !args.yes {
        println!();
        println!("Dry-run mode: no changes made.");
        println!("Run with --yes to perform the rename.");
        return Ok(());
    }

    let backup = renamer.create_backup()?;
    println!();
    println!("Backup created: {}", backup.display());

    let mut result = renamer.rename_project_files(&new_name);
    if result.success && !renamer.rename_project_directory(&new_name) {
        result.error(format!(
            "Failed to move project directory to {}",
            renamer.project_root().join(&new_name).display()
        ));
    }

    print_rename_result(&result);

    if !result.success {
        return Err(fail_rename(&mut renamer, &args, result.errors.len()));
    }

    config.project_name = new_name.clone();
    match config.save(config_path) {
        Ok(()) => log::info!("Updated project_name in {}", config_path.display()),
        Err(e) => log::warn!(
            "Renamed, but could not update {}: {}",
            config_path.display(),
            e
        ),
    }

    println!();
    println!(
        "Renamed {} -> {}",
        renamer.current_name(),
        renamer.project_root().join(&new_name).display()
    );
    println!("Backup kept at {}", backup.display());
    Ok(())
}

/// Roll back (unless disabled) and build the error to report.
fn fail_rename(renamer: &mut Renamer, args: &RenameArgs, error_count: usize) -> SubrealError {
    let backup = renamer
        .backup_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    if args.no_rollback {
        return SubrealError::RenameError(format!(
            "{} step(s) failed; partial changes kept (--no-rollback)\n\
             Fix: `subreal restore {}` restores the original project.",
            error_count, backup
        ));
    }

    if renamer.rollback_changes() {
        SubrealError::RenameError(format!(
            "{} step(s) failed; the project was restored from the backup",
            error_count
        ))
    } else {
        SubrealError::RenameError(format!(
            "{} step(s) failed and rollback did not complete\n\
             Fix: `subreal restore {}` restores the original project.",
            error_count, backup
        ))
    }
}
