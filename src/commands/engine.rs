//! `subreal build` and `subreal launch`.

use super::load_config;
use crate::engine::{build_project, launch_editor};
use crate::error::{Result, SubrealError};
use std::path::Path;

pub fn cmd_build(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;

    println!("Building {}Editor...", config.project_name);
    let outcome = build_project(&config)?;

    println!("Command:  {}", outcome.command);
    println!("Duration: {:.1}s", outcome.duration.as_secs_f64());
    println!("Logs:     {}", outcome.stdout_log.display());

    if outcome.is_success() {
        println!("Build succeeded.");
        return Ok(());
    }

    if !outcome.stderr_tail.is_empty() {
        println!();
        println!("Last errors:");
        for line in &outcome.stderr_tail {
            println!("  {}", line);
        }
    }

    if outcome.timed_out {
        return Err(SubrealError::ProcessError(format!(
            "build timed out after {}s\n\
             Fix: raise build_timeout_secs with `subreal config set`.",
            config.build_timeout_secs
        )));
    }

    Err(SubrealError::ProcessError(format!(
        "build failed with exit code {}\nSee {}",
        outcome
            .exit_code
            .map(|code| code.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        outcome.stderr_log.display()
    )))
}

pub fn cmd_launch(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let pid = launch_editor(&config)?;
    println!("Editor started (pid {}).", pid);
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::commands::test_helpers::write_config;
    use crate::test_support::{create_blueprint_project, write_file};

    #[test]
    fn test_build_failure_is_process_error() {
        let (temp, _) = create_blueprint_project("MyGame");
        let config_path = write_config(temp.path(), "MyGame");
        write_file(
            &temp.path().join("ue/Engine/Build/BatchFiles/Linux/Build.sh"),
            "exit 3\n",
        );

        let err = cmd_build(&config_path).unwrap_err();

        assert_eq!(err.exit_code(), crate::exit_codes::PROCESS_FAILURE);
        assert!(err.to_string().contains("exit code 3"));
    }

    #[test]
    fn test_build_success() {
        let (temp, _) = create_blueprint_project("MyGame");
        let config_path = write_config(temp.path(), "MyGame");
        write_file(
            &temp.path().join("ue/Engine/Build/BatchFiles/Linux/Build.sh"),
            "exit 0\n",
        );

        assert!(cmd_build(&config_path).is_ok());
    }
}
