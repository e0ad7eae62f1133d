//! `subreal info` and `subreal check`.

use super::load_config;
use crate::engine::EnginePaths;
use crate::error::{Result, SubrealError};
use std::path::Path;

pub fn cmd_info(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let paths = EnginePaths::resolve(&config);

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };

    println!("Config:              {}", source);
    println!("Project name:        {}", config.project_name);
    println!("Project directory:   {}", paths.project_dir.display());
    println!("Project file:        {}", paths.descriptor.display());
    println!("Engine version:      {}", config.ue_version);
    println!("Engine directory:    {}", paths.engine_dir.display());
    println!("Platform:            {}", paths.platform);
    println!("Editor:              {}", paths.editor.display());
    println!("Build tool:          {}", paths.build_tool.display());
    println!("Build configuration: {}", config.build_configuration);
    println!("Build timeout:       {}s", config.build_timeout_secs);

    Ok(())
}

pub fn cmd_check(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let issues = EnginePaths::resolve(&config).issues();

    if issues.is_empty() {
        println!("All paths found.");
        return Ok(());
    }

    println!("Problems found:");
    for issue in &issues {
        println!("  - {}", issue);
    }

    Err(SubrealError::UserError(format!(
        "{} path issue(s) found\n\
         Fix: set ue_dir, editor_exe_name or project settings with `subreal config set`.",
        issues.len()
    )))
}
