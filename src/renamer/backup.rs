//! Snapshot and restore of the project directory.

use super::Renamer;
use super::types::RenameStage;
use crate::error::{Result, SubrealError};
use crate::fs::copy_dir_all;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

impl Renamer {
    /// Copies the project directory to `<root>/<current>_backup_<timestamp>`.
    ///
    /// A failed copy removes whatever was written and leaves the previously
    /// recorded backup (if any) in place.
    pub fn create_backup(&mut self) -> Result<PathBuf> {
        if !self.project_dir.is_dir() {
            return Err(SubrealError::FilesystemError(format!(
                "Project directory not found: {}",
                self.project_dir.display()
            )));
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let backup_dir = self
            .project_root
            .join(format!("{}_backup_{}", self.current_name, timestamp));

        if backup_dir.exists() {
            return Err(SubrealError::FilesystemError(format!(
                "Backup directory already exists: {}",
                backup_dir.display()
            )));
        }

        match copy_dir_all(&self.project_dir, &backup_dir) {
            Ok(bytes) => {
                log::info!(
                    "Backed up {} to {} ({} bytes)",
                    self.project_dir.display(),
                    backup_dir.display(),
                    bytes
                );
            }
            Err(e) => {
                discard(&backup_dir);
                return Err(e);
            }
        }

        if let Some(previous) = self.backup_dir.replace(backup_dir.clone()) {
            log::debug!("Previous backup left on disk: {}", previous.display());
        }
        self.stage.set(RenameStage::BackedUp);
        Ok(backup_dir)
    }

    /// Restores the project from the recorded backup, then deletes the backup.
    ///
    /// The backup is copied to a staging directory first; the live tree
    /// (original or moved location) is only set aside once that copy has
    /// succeeded, and is put back if the swap fails. Returns false when no
    /// backup is recorded, it is missing, or the restore could not complete.
    pub fn rollback_changes(&mut self) -> bool {
        let Some(backup_dir) = self.backup_dir.clone() else {
            log::warn!("No backup recorded; nothing to roll back");
            return false;
        };
        if !backup_dir.is_dir() {
            log::warn!("Backup not found: {}", backup_dir.display());
            return false;
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let staging = self
            .project_root
            .join(format!(".{}_restore_{}", self.current_name, timestamp));

        if !stage_backup(&backup_dir, &staging) {
            return false;
        }

        let mut live = vec![self.project_dir.clone()];
        if let Some(renamed) = &self.renamed_dir
            && *renamed != self.project_dir
        {
            live.push(renamed.clone());
        }

        let mut set_aside: Vec<(PathBuf, PathBuf)> = Vec::new();
        for (index, dir) in live.iter().enumerate() {
            if !dir.exists() {
                continue;
            }
            let parked = self.project_root.join(format!(
                ".{}_discard_{}_{}",
                self.current_name, timestamp, index
            ));
            if let Err(e) = fs::rename(dir, &parked) {
                log::warn!("Failed to move {} aside: {}", dir.display(), e);
                put_back(&set_aside);
                discard(&staging);
                return false;
            }
            set_aside.push((dir.clone(), parked));
        }

        if let Err(e) = fs::rename(&staging, &self.project_dir) {
            log::warn!(
                "Failed to move restored project into {}: {}",
                self.project_dir.display(),
                e
            );
            put_back(&set_aside);
            discard(&staging);
            return false;
        }

        for (_, parked) in &set_aside {
            discard(parked);
        }

        match fs::remove_dir_all(&backup_dir) {
            Ok(()) => self.backup_dir = None,
            Err(e) => log::warn!("Restored, but failed to delete backup {}: {}", backup_dir.display(), e),
        }

        log::info!("Rolled back {}", self.project_dir.display());
        self.renamed_dir = None;
        self.stage.set(RenameStage::RolledBack);
        true
    }
}

/// Copies the backup into `staging`, which must not exist yet. A partial
/// copy is removed; a pre-existing `staging` is left untouched.
pub(super) fn stage_backup(backup_dir: &Path, staging: &Path) -> bool {
    if staging.exists() {
        log::warn!("Restore staging path already exists: {}", staging.display());
        return false;
    }
    if let Err(e) = copy_dir_all(backup_dir, staging) {
        log::warn!("Failed to stage backup for restore: {}", e);
        discard(staging);
        return false;
    }
    true
}

fn put_back(set_aside: &[(PathBuf, PathBuf)]) {
    for (original, parked) in set_aside.iter().rev() {
        if let Err(e) = fs::rename(parked, original) {
            log::warn!(
                "Could not return {} to {}: {}",
                parked.display(),
                original.display(),
                e
            );
        }
    }
}

fn discard(path: &Path) {
    if path.exists()
        && let Err(e) = fs::remove_dir_all(path)
    {
        log::warn!("Failed to remove {}: {}", path.display(), e);
    }
}
