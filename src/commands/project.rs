//! `subreal detect`, `subreal validate-name` and `subreal restore`.

use super::load_config;
use super::scan::make_relative;
use crate::cli::{RestoreArgs, ValidateNameArgs};
use crate::error::{Result, SubrealError};
use crate::renamer::{NameValidation, ProjectInfo, Renamer};
use regex::Regex;
use std::path::Path;

pub fn cmd_detect(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let renamer = Renamer::new(config.project_root_path(), &config.project_name);

    let info = renamer.detect_project_type();
    if let Some(error) = &info.error {
        return Err(SubrealError::UserError(error.clone()));
    }

    print_project_info(renamer.project_dir(), &info);
    Ok(())
}

fn print_project_info(project_dir: &Path, info: &ProjectInfo) {
    println!("Project:      {}", project_dir.display());
    println!("Type:         {}", info.project_type);
    println!("Has Source:   {}", yes_no(info.has_source));
    println!("Has Binaries: {}", yes_no(info.has_binaries));

    if !info.modules.is_empty() {
        println!("Modules:      {}", info.modules.join(", "));
    }
    if !info.descriptor_modules.is_empty() {
        println!("Descriptor modules: {}", info.descriptor_modules.join(", "));
    }
    if !info.source_files.is_empty() {
        println!("Source files ({}):", info.source_files.len());
        for file in &info.source_files {
            println!("  - {}", make_relative(file, project_dir));
        }
    }
    if !info.build_files.is_empty() {
        println!("Build files ({}):", info.build_files.len());
        for file in &info.build_files {
            println!("  - {}", make_relative(file, project_dir));
        }
    }
    if let Some(warning) = &info.warning {
        println!("Warning: {}", warning);
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn cmd_validate_name(config_path: &Path, args: ValidateNameArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let renamer = Renamer::new(config.project_root_path(), &config.project_name);

    let validation = renamer.validate_new_name(&args.name);
    print_validation(&validation);

    if !validation.valid {
        return Err(SubrealError::ValidationError(validation.errors.join("; ")));
    }
    println!("'{}' is a valid project name.", args.name.trim());
    Ok(())
}

pub(super) fn print_validation(validation: &NameValidation) {
    for error in &validation.errors {
        println!("  error: {}", error);
    }
    for warning in &validation.warnings {
        println!("  warning: {}", warning);
    }
}

/// Restore a project from a backup directory made by `rename`.
///
/// The project name is taken from the backup directory name
/// (`<name>_backup_<timestamp>`), falling back to the configured name.
pub fn cmd_restore(config_path: &Path, args: RestoreArgs) -> Result<()> {
    let config = load_config(config_path)?;

    if !args.backup_dir.is_dir() {
        return Err(SubrealError::UserError(format!(
            "backup directory not found: {}",
            args.backup_dir.display()
        )));
    }

    let name = backup_project_name(&args.backup_dir).unwrap_or_else(|| config.project_name.clone());
    let mut renamer =
        Renamer::with_backup(config.project_root_path(), &name, &args.backup_dir);

    if !renamer.rollback_changes() {
        return Err(SubrealError::FilesystemError(format!(
            "failed to restore {} from {}",
            renamer.project_dir().display(),
            args.backup_dir.display()
        )));
    }

    println!(
        "Restored {} from {}",
        renamer.project_dir().display(),
        args.backup_dir.display()
    );

    if name != config.project_name {
        let configured = config.project_dir();
        if configured.exists() {
            println!(
                "Note: {} was left in place; the config still points at it.",
                configured.display()
            );
        }
        println!(
            "Run `subreal config set project_name {}` to work on the restored project.",
            name
        );
    }

    Ok(())
}

/// `MyGame` for `.../MyGame_backup_20240101_120000`.
fn backup_project_name(backup_dir: &Path) -> Option<String> {
    let file_name = backup_dir.file_name()?.to_str()?;
    let pattern = Regex::new(r"^(.+)_backup_\d{8}_\d{6}$").ok()?;
    let captures = pattern.captures(file_name)?;
    Some(captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_helpers::write_config;
    use crate::renamer::Renamer;
    use crate::test_support::{create_blueprint_project, create_cpp_project};
    use std::fs;

    #[test]
    fn test_backup_project_name() {
        assert_eq!(
            backup_project_name(Path::new("/p/MyGame_backup_20240101_120000")),
            Some("MyGame".to_string())
        );
        assert_eq!(
            backup_project_name(Path::new("My_Game_backup_20240101_120000")),
            Some("My_Game".to_string())
        );
        assert_eq!(backup_project_name(Path::new("/p/MyGame")), None);
    }

    #[test]
    fn test_detect_cpp_project() {
        let (temp, _) = create_cpp_project("MyGame");
        let config_path = write_config(temp.path(), "MyGame");

        assert!(cmd_detect(&config_path).is_ok());
    }

    #[test]
    fn test_detect_missing_project() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = write_config(temp.path(), "MyGame");

        let err = cmd_detect(&config_path).unwrap_err();

        assert!(err.to_string().contains("Project directory not found"));
    }

    #[test]
    fn test_validate_name_exit_codes() {
        let (temp, _) = create_blueprint_project("MyGame");
        let config_path = write_config(temp.path(), "MyGame");

        assert!(
            cmd_validate_name(&config_path, ValidateNameArgs { name: "Awesome".into() }).is_ok()
        );

        let err = cmd_validate_name(&config_path, ValidateNameArgs { name: "MyGame".into() })
            .unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn test_restore_from_backup() {
        let (temp, project_dir) = create_blueprint_project("MyGame");
        let config_path = write_config(temp.path(), "MyGame");
        let backup = Renamer::new(temp.path(), "MyGame").create_backup().unwrap();
        fs::remove_dir_all(project_dir.join("Content")).unwrap();

        cmd_restore(
            &config_path,
            RestoreArgs {
                backup_dir: backup.clone(),
            },
        )
        .unwrap();

        assert!(project_dir.join("Content/Maps/Main.umap").exists());
        assert!(!backup.exists());
    }

    #[test]
    fn test_restore_missing_backup() {
        let (temp, _) = create_blueprint_project("MyGame");
        let config_path = write_config(temp.path(), "MyGame");

        let err = cmd_restore(
            &config_path,
            RestoreArgs {
                backup_dir: temp.path().join("MyGame_backup_20000101_000000"),
            },
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    }
}
