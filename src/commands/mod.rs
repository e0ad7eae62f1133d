//! Command implementations for subreal.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command loads the config file named by `--config`
//! (defaults apply when it does not exist).

mod clean;
mod config_cmd;
mod engine;
mod info;
mod project;
mod rename;
mod scan;

#[cfg(test)]
mod test_helpers;

use crate::cli::{Cli, Command, ConfigAction};
use crate::config::Config;
use crate::error::{Result, SubrealError};
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Command::Info => info::cmd_info(&config_path),
        Command::Check => info::cmd_check(&config_path),
        Command::Scan(args) => scan::cmd_scan(&config_path, args),
        Command::Clean(args) => clean::cmd_clean(&config_path, args),
        Command::Detect => project::cmd_detect(&config_path),
        Command::ValidateName(args) => project::cmd_validate_name(&config_path, args),
        Command::Rename(args) => rename::cmd_rename(&config_path, args),
        Command::Restore(args) => project::cmd_restore(&config_path, args),
        Command::Build => engine::cmd_build(&config_path),
        Command::Launch => engine::cmd_launch(&config_path),
        Command::Config(cmd) => match cmd.action {
            ConfigAction::Show => config_cmd::cmd_config_show(&config_path),
            ConfigAction::Set(args) => config_cmd::cmd_config_set(&config_path, args),
        },
    }
}

/// Load the config, falling back to defaults when the file is absent.
fn load_config(config_path: &Path) -> Result<Config> {
    Config::load_or_default(config_path)
}

/// Project directory from the config, which must exist.
fn require_project_dir(config: &Config) -> Result<PathBuf> {
    let project_dir = config.project_dir();
    if !project_dir.is_dir() {
        return Err(SubrealError::UserError(format!(
            "project directory not found: {}\n\
             Fix: set project_root and project_name with `subreal config set`.",
            project_dir.display()
        )));
    }
    Ok(project_dir)
}
