//! Starting the editor.

use super::EnginePaths;
use crate::config::Config;
use crate::error::{Result, SubrealError};
use std::process::{Command, Stdio};

/// Starts the editor on the project descriptor and returns its process id.
///
/// The editor is not waited for.
pub fn launch_editor(config: &Config) -> Result<u32> {
    let paths = EnginePaths::resolve(config);

    if !paths.editor.is_file() {
        return Err(SubrealError::ValidationError(format!(
            "editor executable not found: {}",
            paths.editor.display()
        )));
    }
    if !paths.descriptor.is_file() {
        return Err(SubrealError::ValidationError(format!(
            "project file not found: {}",
            paths.descriptor.display()
        )));
    }

    let child = Command::new(&paths.editor)
        .arg(&paths.descriptor)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            SubrealError::ProcessError(format!(
                "failed to launch editor '{}': {}",
                paths.editor.display(),
                e
            ))
        })?;

    log::info!("Launched editor (pid {})", child.id());
    Ok(child.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;
    use crate::test_support::create_blueprint_project;

    #[test]
    fn test_launch_without_editor_fails() {
        let (temp, _) = create_blueprint_project("MyGame");
        let config = Config {
            project_name: "MyGame".to_string(),
            project_root: temp.path().to_string_lossy().into_owned(),
            ue_dir: Some(temp.path().join("ue").to_string_lossy().into_owned()),
            platform: Platform::Linux,
            ..Default::default()
        };

        let err = launch_editor(&config).unwrap_err();

        assert!(err.to_string().contains("editor executable not found"));
        assert_eq!(err.exit_code(), crate::exit_codes::VALIDATION_FAILURE);
    }
}
