//! Unreal Engine tooling: path resolution, building and launching the editor.

mod build;
mod launch;

pub use build::{BuildOutcome, build_command, build_project};
pub use launch::launch_editor;

use crate::config::{Config, Platform};
use std::path::PathBuf;

/// Engine and project paths derived from a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnginePaths {
    pub platform: Platform,
    pub engine_dir: PathBuf,
    pub project_dir: PathBuf,
    pub descriptor: PathBuf,
    pub editor: PathBuf,
    pub build_tool: PathBuf,
}

impl EnginePaths {
    pub fn resolve(config: &Config) -> Self {
        let platform = config.platform;
        let engine_dir = config.engine_dir();

        let editor = engine_dir
            .join("Engine")
            .join("Binaries")
            .join(platform.target_name())
            .join(config.editor_exe_name());

        let batch_files = engine_dir.join("Engine").join("Build").join("BatchFiles");
        let build_tool = match platform {
            Platform::Windows => batch_files.join("Build.bat"),
            Platform::Mac => batch_files.join("Mac").join("Build.sh"),
            Platform::Linux => batch_files.join("Linux").join("Build.sh"),
        };

        Self {
            platform,
            engine_dir,
            project_dir: config.project_dir(),
            descriptor: config.descriptor_path(),
            editor,
            build_tool,
        }
    }

    /// Human-readable list of missing paths; empty when everything exists.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.engine_dir.is_dir() {
            issues.push(format!(
                "Unreal Engine directory not found: {}",
                self.engine_dir.display()
            ));
        }
        if !self.descriptor.is_file() {
            issues.push(format!("Project file not found: {}", self.descriptor.display()));
        }
        if !self.editor.is_file() {
            issues.push(format!("Editor executable not found: {}", self.editor.display()));
        }
        if !self.build_tool.is_file() {
            issues.push(format!("Build tool not found: {}", self.build_tool.display()));
        }

        issues
    }
}
