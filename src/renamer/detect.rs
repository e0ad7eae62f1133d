//! Project type detection.

use super::Renamer;
use super::types::{ProjectInfo, ProjectType, RenameStage};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SOURCE_EXTENSIONS: [&str; 2] = ["h", "cpp"];
const BUILD_EXTENSION: &str = "cs";

#[derive(Debug, Deserialize)]
struct Descriptor {
    #[serde(rename = "Modules", default)]
    modules: Vec<DescriptorModule>,
}

#[derive(Debug, Deserialize)]
struct DescriptorModule {
    #[serde(rename = "Name")]
    name: String,
}

impl Renamer {
    /// Classifies the project as blueprint-only or C++.
    ///
    /// Missing project directory or descriptor is reported through
    /// [`ProjectInfo::error`]. A `Modules` list in the descriptor forces
    /// [`ProjectType::Cpp`] even without a `Source` directory.
    pub fn detect_project_type(&self) -> ProjectInfo {
        let info = self.inspect();
        if info.error.is_none() {
            self.advance(RenameStage::Detected);
        }
        info
    }

    pub(crate) fn inspect(&self) -> ProjectInfo {
        let mut info = ProjectInfo::default();

        if !self.project_dir.is_dir() {
            info.error = Some(format!(
                "Project directory not found: {}",
                self.project_dir.display()
            ));
            return info;
        }
        if !self.descriptor_path.is_file() {
            info.error = Some(format!(
                "Project file not found: {}",
                self.descriptor_path.display()
            ));
            return info;
        }

        let source_dir = self.project_dir.join("Source");
        if source_dir.is_dir() {
            info.has_source = true;
            info.project_type = ProjectType::Cpp;

            for (name, module_dir) in module_dirs(&source_dir) {
                collect_module_files(&module_dir, &mut info);
                info.modules.push(name);
            }
        }

        info.has_binaries = self.project_dir.join("Binaries").exists();

        match read_descriptor(&self.descriptor_path) {
            Ok(descriptor) => {
                info.descriptor_modules = descriptor.modules.into_iter().map(|m| m.name).collect();
                if !info.descriptor_modules.is_empty() {
                    info.project_type = ProjectType::Cpp;
                }
            }
            Err(message) => info.warning = Some(message),
        }

        info
    }
}

/// Immediate, non-hidden subdirectories of `Source`, sorted by name.
pub(crate) fn module_dirs(source_dir: &Path) -> Vec<(String, PathBuf)> {
    let Ok(entries) = std::fs::read_dir(source_dir) else {
        return Vec::new();
    };

    let mut modules: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            (!name.starts_with('.')).then(|| (name, entry.path()))
        })
        .collect();
    modules.sort();
    modules
}

fn collect_module_files(module_dir: &Path, info: &mut ProjectInfo) {
    let walker = WalkDir::new(module_dir).sort_by_file_name();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(extension) = entry.path().extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if SOURCE_EXTENSIONS.contains(&extension) {
            info.source_files.push(entry.into_path());
        } else if extension == BUILD_EXTENSION {
            info.build_files.push(entry.into_path());
        }
    }
}

fn read_descriptor(path: &Path) -> Result<Descriptor, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Could not parse {}: {}", path.display(), e))
}
