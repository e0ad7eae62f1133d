//! Atomic file writes.
//!
//! Every write goes to a temporary sibling file (`.{filename}.tmp`), is synced
//! to disk, and is then renamed over the target. A reader therefore sees either
//! the old content or the new content, never a truncated file.
//!
//! `std::fs::rename` replaces an existing destination on both POSIX and
//! Windows, so no platform-specific replace path is needed.

use crate::error::{Result, SubrealError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// # Example
///
/// ```no_run
/// use subreal::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("subreal.yaml"), b"project_name: Subreal\n")?;
/// # Ok::<(), subreal::error::SubrealError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            SubrealError::FilesystemError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SubrealError::FilesystemError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            SubrealError::FilesystemError(format!("invalid file path: {}", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        SubrealError::FilesystemError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        SubrealError::FilesystemError(format!("failed to write temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        SubrealError::FilesystemError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}
