//! The in-place rename steps.

use super::config_files::update_config_files;
use super::source::update_source_tree;
use super::types::{ProjectType, RenameResult, RenameStage};
use super::{Renamer, descriptor_file_name};
use crate::fs::atomic_write_file;
use std::fs;

/// Generated directories removed after a rename, relative to the project.
pub const GENERATED_DIRS: [&str; 3] = ["Binaries", "Intermediate", "Saved/.vs"];

impl Renamer {
    /// Renames descriptor, config entries and (for C++ projects) sources
    /// from the current name to `new_name`, inside the existing directory.
    ///
    /// Each step records its own changes and errors and later steps still
    /// run. The caller is expected to have validated `new_name` and taken a
    /// backup.
    pub fn rename_project_files(&mut self, new_name: &str) -> RenameResult {
        let new_name = new_name.trim();
        let old_name = self.current_name.clone();
        let mut result = RenameResult::new();

        // Classified before the descriptor moves, otherwise it would not be found.
        let info = self.inspect();
        if let Some(error) = info.error {
            result.error(error);
            return result;
        }

        let new_descriptor = self.project_dir.join(descriptor_file_name(new_name));
        let descriptor_moved = if new_descriptor.exists() {
            result.error(format!(
                "Cannot rename {}: {} already exists",
                descriptor_file_name(&old_name),
                descriptor_file_name(new_name)
            ));
            false
        } else {
            match fs::rename(&self.descriptor_path, &new_descriptor) {
                Ok(()) => {
                    result.change(format!(
                        "Renamed {} -> {}",
                        descriptor_file_name(&old_name),
                        descriptor_file_name(new_name)
                    ));
                    true
                }
                Err(e) => {
                    result.error(format!(
                        "Failed to rename {}: {}",
                        descriptor_file_name(&old_name),
                        e
                    ));
                    false
                }
            }
        };

        if descriptor_moved {
            self.update_descriptor(&new_descriptor, &old_name, new_name, &mut result);
        }

        update_config_files(&self.project_dir.join("Config"), &old_name, new_name, &mut result);

        if info.project_type == ProjectType::Cpp {
            update_source_tree(&self.project_dir.join("Source"), &old_name, new_name, &mut result);
        }

        for relative in GENERATED_DIRS {
            let dir = self.project_dir.join(relative);
            if !dir.is_dir() {
                continue;
            }
            match fs::remove_dir_all(&dir) {
                Ok(()) => result.change(format!("Removed {}", relative)),
                Err(e) => result.error(format!("Failed to remove {}: {}", relative, e)),
            }
        }

        self.stage.set(RenameStage::Renamed);
        result
    }

    fn update_descriptor(
        &self,
        path: &std::path::Path,
        old: &str,
        new: &str,
        result: &mut RenameResult,
    ) {
        let file_name = descriptor_file_name(new);
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                result.error(format!("Failed to read {}: {}", file_name, e));
                return;
            }
        };

        let quoted_old = format!("\"{}\"", old);
        if !content.contains(&quoted_old) {
            return;
        }

        let updated = content.replace(&quoted_old, &format!("\"{}\"", new));
        match atomic_write_file(path, &updated) {
            Ok(()) => result.change(format!("Updated module references in {}", file_name)),
            Err(e) => result.error(format!("Failed to update {}: {}", file_name, e)),
        }
    }
}
