//! CLI argument parsing for subreal.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Subreal: cleanup and rename tooling for Unreal Engine projects.
///
/// The project lives at `<project_root>/<project_name>` as configured in
/// subreal.yaml. Destructive commands preview by default; pass --yes to act.
#[derive(Parser, Debug)]
#[command(name = "subreal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file.
    #[arg(long, global = true, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for subreal.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show configuration and resolved engine paths.
    Info,

    /// Check that the engine, editor, build tool and project exist.
    ///
    /// Exits non-zero when anything is missing.
    Check,

    /// Scan the project for cleanable files.
    ///
    /// Reports per-category counts and sizes. Nothing is deleted.
    Scan(ScanArgs),

    /// Delete cleanable files.
    ///
    /// Only safe categories are ever deleted. Without --yes this is a
    /// dry run that shows what would be removed.
    Clean(CleanArgs),

    /// Detect whether the project is blueprint-only or C++.
    Detect,

    /// Check a candidate project name without renaming anything.
    #[command(name = "validate-name")]
    ValidateName(ValidateNameArgs),

    /// Rename the project.
    ///
    /// Detects the project type, validates the name, backs the project up,
    /// rewrites descriptor, config and sources, and moves the directory.
    /// Rolls back from the backup if any step fails.
    Rename(RenameArgs),

    /// Restore the project from a backup directory made by `rename`.
    Restore(RestoreArgs),

    /// Build the project's editor target with the engine build tool.
    Build,

    /// Launch the editor on the project.
    Launch,

    /// Show or edit the config file.
    Config(ConfigCommand),
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// List the first entries of every category.
    #[arg(long)]
    pub details: bool,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Actually delete (default is a dry run).
    #[arg(long)]
    pub yes: bool,

    /// Write a manifest of everything found before deleting.
    #[arg(long)]
    pub manifest: bool,

    /// Only clean these categories (e.g. temp_cache, build_artifacts).
    #[arg(long = "category", value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Do not remove empty directories afterwards.
    #[arg(long)]
    pub no_empty_dirs: bool,
}

/// Arguments for the `validate-name` command.
#[derive(Parser, Debug)]
pub struct ValidateNameArgs {
    /// Candidate project name.
    pub name: String,
}

/// Arguments for the `rename` command.
#[derive(Parser, Debug)]
pub struct RenameArgs {
    /// New project name.
    pub new_name: String,

    /// Perform the rename (default is a preview).
    #[arg(long)]
    pub yes: bool,

    /// Keep partial changes instead of restoring the backup on failure.
    #[arg(long)]
    pub no_rollback: bool,
}

/// Arguments for the `restore` command.
#[derive(Parser, Debug)]
pub struct RestoreArgs {
    /// Backup directory to restore from.
    pub backup_dir: PathBuf,
}

/// Config subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Available config actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective config as YAML.
    Show,

    /// Set one config value and save the file.
    Set(ConfigSetArgs),
}

/// Arguments for the `config set` command.
#[derive(Parser, Debug)]
pub struct ConfigSetArgs {
    /// Config key (e.g. project_name, ue_dir, build_timeout_secs).
    pub key: String,

    /// New value. An empty value resets optional keys to their default.
    pub value: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
