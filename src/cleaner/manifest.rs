//! Plain-text record of what a clean is about to delete.

use super::Cleaner;
use super::scan::ScanResult;
use super::size::format_size;
use crate::error::Result;
use crate::fs::atomic_write_file;
use chrono::Local;
use std::path::{Path, PathBuf};

impl Cleaner {
    /// Write `cleanup_backup_<timestamp>.txt` into the project directory.
    ///
    /// Lists every entry of every non-empty category. Nothing reads this file
    /// back; it exists so a user can see afterwards what was removed.
    pub fn write_backup_manifest(&self, scan: &ScanResult) -> Result<PathBuf> {
        let now = Local::now();
        let path = self.project_root.join(format!(
            "cleanup_backup_{}.txt",
            now.format("%Y%m%d_%H%M%S")
        ));

        let generated = now.format("%Y-%m-%d %H:%M:%S").to_string();
        let content = render_manifest(&self.project_root, scan, &generated);
        atomic_write_file(&path, &content)?;

        log::info!("Wrote cleanup manifest {}", path.display());
        Ok(path)
    }
}

/// Render the manifest body.
pub fn render_manifest(project_root: &Path, scan: &ScanResult, generated: &str) -> String {
    let mut out = format!(
        "Subreal Project Cleanup Backup List\nGenerated: {}\nProject: {}\n{}\n\n",
        generated,
        project_root.display(),
        "=".repeat(60)
    );

    for (category, category_scan) in scan.iter() {
        if category_scan.is_empty() {
            continue;
        }

        out.push_str(&format!(
            "Category: {}\nFiles: {}, Size: {}\n{}\n",
            category.description(),
            category_scan.count(),
            format_size(category_scan.total_size),
            "-".repeat(40)
        ));
        for entry in &category_scan.entries {
            out.push_str(&format!("{}: {}\n", entry.kind, entry.path.display()));
        }
        out.push('\n');
    }

    out
}
