//! Candidate name checks.

use super::Renamer;
use super::types::{NameValidation, RenameStage};

/// Characters that are rejected in a project name.
pub const INVALID_NAME_CHARS: &str = "<>:\"/\\|?*";

/// Longest accepted project name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

impl Renamer {
    /// Checks `new_name` against naming rules and the filesystem.
    ///
    /// Surrounding whitespace is ignored. Only the existence of
    /// `<project_root>/<new_name>` is probed on disk.
    pub fn validate_new_name(&self, new_name: &str) -> NameValidation {
        let mut result = NameValidation::new();

        let name = new_name.trim();
        if name.is_empty() {
            result.reject("Project name cannot be empty");
            return result;
        }

        if name.chars().any(|c| INVALID_NAME_CHARS.contains(c)) {
            result.reject(format!(
                "Project name contains invalid characters: {}",
                INVALID_NAME_CHARS
            ));
        }

        if name.contains(' ') {
            result.warn("Project name contains spaces. Consider using underscore or camelCase.");
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            result.reject(format!(
                "Project name is too long (max {} characters)",
                MAX_NAME_LENGTH
            ));
        }

        if name.starts_with(|c: char| c.is_ascii_digit()) {
            result.warn(
                "Project name starts with a number. This may cause issues with C++ compilation.",
            );
        }

        let target = self.project_root.join(name);
        if target.exists() {
            result.reject(format!("Directory already exists: {}", target.display()));
        }

        if name == self.current_name {
            result.reject("New name is the same as current name");
        }

        if result.valid {
            self.advance(RenameStage::Validated);
        }
        result
    }
}
