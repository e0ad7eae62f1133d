//! Project renaming.
//!
//! A [`Renamer`] drives one rename transaction over a project directory at
//! `<project_root>/<current_name>`:
//!
//! 1. [`Renamer::detect_project_type`] classifies the project.
//! 2. [`Renamer::validate_new_name`] checks the candidate name.
//! 3. [`Renamer::create_backup`] snapshots the project directory.
//! 4. [`Renamer::rename_project_files`] rewrites descriptor, config and source.
//! 5. [`Renamer::rename_project_directory`] moves the directory, or
//!    [`Renamer::rollback_changes`] restores the snapshot.
//!
//! None of the steps roll back on their own; the caller decides.

mod backup;
mod config_files;
mod detect;
mod files;
mod source;
pub mod types;
mod validate;


pub use source::{MovedFile, SourceRewriter};
pub use types::{NameValidation, ProjectInfo, ProjectType, RenameResult, RenameStage};

use std::cell::Cell;
use std::path::{Path, PathBuf};

/// Descriptor file extension.
pub const DESCRIPTOR_EXTENSION: &str = "uproject";

/// Rename transaction over a single project directory.
#[derive(Debug)]
pub struct Renamer {
    project_root: PathBuf,
    current_name: String,
    project_dir: PathBuf,
    descriptor_path: PathBuf,
    backup_dir: Option<PathBuf>,
    /// Directory the project was moved to by `rename_project_directory`.
    renamed_dir: Option<PathBuf>,
    stage: Cell<RenameStage>,
}

impl Renamer {
    pub fn new(project_root: impl AsRef<Path>, current_name: impl Into<String>) -> Self {
        let project_root = absolute(project_root.as_ref());
        let current_name = current_name.into();
        let project_dir = project_root.join(&current_name);
        let descriptor_path = project_dir.join(descriptor_file_name(&current_name));

        Self {
            project_root,
            current_name,
            project_dir,
            descriptor_path,
            backup_dir: None,
            renamed_dir: None,
            stage: Cell::new(RenameStage::Idle),
        }
    }

    /// Renamer that already knows its backup, for restoring after a crash.
    pub fn with_backup(
        project_root: impl AsRef<Path>,
        current_name: impl Into<String>,
        backup_dir: impl AsRef<Path>,
    ) -> Self {
        let mut renamer = Self::new(project_root, current_name);
        renamer.backup_dir = Some(absolute(backup_dir.as_ref()));
        renamer.stage.set(RenameStage::BackedUp);
        renamer
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    /// Most recent backup made (or adopted) by this renamer.
    pub fn backup_dir(&self) -> Option<&Path> {
        self.backup_dir.as_deref()
    }

    pub fn stage(&self) -> RenameStage {
        self.stage.get()
    }

    /// Moves `<root>/<current>` to `<root>/<new_name>`.
    ///
    /// Returns false when the target already exists or the move fails.
    pub fn rename_project_directory(&mut self, new_name: &str) -> bool {
        let new_name = new_name.trim();
        let target = self.project_root.join(new_name);

        if target.exists() {
            log::warn!("Cannot move project: {} already exists", target.display());
            return false;
        }

        match std::fs::rename(&self.project_dir, &target) {
            Ok(()) => {
                log::info!(
                    "Moved project directory {} -> {}",
                    self.project_dir.display(),
                    target.display()
                );
                self.renamed_dir = Some(target);
                self.stage.set(RenameStage::Finalized);
                true
            }
            Err(e) => {
                log::warn!(
                    "Failed to move project directory {}: {}",
                    self.project_dir.display(),
                    e
                );
                false
            }
        }
    }

    /// Advances the stage without moving it backwards.
    fn advance(&self, stage: RenameStage) {
        if self.stage.get() < stage {
            self.stage.set(stage);
        }
    }
}

pub(crate) fn descriptor_file_name(name: &str) -> String {
    format!("{}.{}", name, DESCRIPTOR_EXTENSION)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
