//! Data returned by the renamer.

use serde::Serialize;
use std::path::PathBuf;

/// Whether a project carries compiled code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// Script-only project: no code modules.
    #[default]
    Blueprint,
    /// Project with C++ modules under `Source`.
    Cpp,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectType::Blueprint => write!(f, "blueprint"),
            ProjectType::Cpp => write!(f, "cpp"),
        }
    }
}

/// Result of [`super::Renamer::detect_project_type`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectInfo {
    pub project_type: ProjectType,
    /// A `Source` directory exists.
    pub has_source: bool,
    /// A `Binaries` directory exists.
    pub has_binaries: bool,
    /// Immediate subdirectories of `Source`, sorted.
    pub modules: Vec<String>,
    /// Header and implementation files found inside module directories.
    pub source_files: Vec<PathBuf>,
    /// Build description (`.cs`) files found inside module directories.
    pub build_files: Vec<PathBuf>,
    /// Module names listed in the project descriptor.
    pub descriptor_modules: Vec<String>,
    /// Set when detection could not run at all.
    pub error: Option<String>,
    /// Set when the descriptor could not be parsed.
    pub warning: Option<String>,
}

/// Outcome of checking a candidate project name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameValidation {
    pub valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl NameValidation {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn reject(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Accumulated outcome of [`super::Renamer::rename_project_files`].
///
/// `success` is true only when no step reported an error.
#[derive(Debug, Clone, Serialize)]
pub struct RenameResult {
    pub success: bool,
    pub changes: Vec<String>,
    pub errors: Vec<String>,
}

impl RenameResult {
    pub(crate) fn new() -> Self {
        Self {
            success: true,
            changes: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn change(&mut self, description: impl Into<String>) {
        self.changes.push(description.into());
    }

    pub(crate) fn error(&mut self, description: impl Into<String>) {
        let description = description.into();
        log::warn!("{}", description);
        self.success = false;
        self.errors.push(description);
    }
}

/// Where a rename transaction currently stands.
///
/// Variants are ordered by progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenameStage {
    Idle,
    Detected,
    Validated,
    BackedUp,
    Renamed,
    Finalized,
    RolledBack,
}
