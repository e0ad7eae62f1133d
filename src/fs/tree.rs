//! Directory tree helpers: recursive copy, size accounting, emptiness checks.

use crate::error::{Result, SubrealError};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copy `source` to `destination`.
///
/// `destination` must not exist yet; it is created by this call. Symlinks are
/// recreated as symlinks on Unix and copied as regular files elsewhere.
/// Any failure aborts the copy and is returned: a partial copy is never
/// reported as success.
///
/// Returns the number of bytes copied.
pub fn copy_dir_all(source: &Path, destination: &Path) -> Result<u64> {
    if !source.is_dir() {
        return Err(SubrealError::FilesystemError(format!(
            "copy source is not a directory: {}",
            source.display()
        )));
    }

    fs::create_dir(destination).map_err(|e| {
        SubrealError::FilesystemError(format!(
            "failed to create '{}': {}",
            destination.display(),
            e
        ))
    })?;

    let mut copied = 0u64;

    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(|e| {
            SubrealError::FilesystemError(format!(
                "failed to read '{}' while copying: {}",
                source.display(),
                e
            ))
        })?;

        let relative = entry.path().strip_prefix(source).map_err(|e| {
            SubrealError::FilesystemError(format!(
                "unexpected path '{}' under '{}': {}",
                entry.path().display(),
                source.display(),
                e
            ))
        })?;
        let target = destination.join(relative);
        let file_type = entry.file_type();

        let copy_result = if file_type.is_dir() {
            fs::create_dir(&target)
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)
        } else {
            fs::copy(entry.path(), &target).map(|bytes| copied += bytes)
        };

        copy_result.map_err(|e| {
            SubrealError::FilesystemError(format!(
                "failed to copy '{}' to '{}': {}",
                entry.path().display(),
                target.display(),
                e
            ))
        })?;
    }

    Ok(copied)
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    let points_to = fs::read_link(link)?;
    std::os::unix::fs::symlink(points_to, target)
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    fs::copy(link, target).map(|_| ())
}

/// Sum of the sizes of all regular files under `path`.
///
/// Best-effort: entries that cannot be read are skipped, so the result is a
/// lower bound when permissions are missing. Symlinks are not followed.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping unreadable entry under {}: {}", path.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

/// Whether `path` is a directory with no entries at all.
pub fn is_dir_empty(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copy_dir_all_copies_nested_tree() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("MyGame");
        fs::create_dir_all(source.join("Content/Maps")).unwrap();
        fs::write(source.join("MyGame.uproject"), "{}").unwrap();
        fs::write(source.join("Content/Maps/Main.umap"), "map").unwrap();

        let destination = temp.path().join("MyGame_backup");
        let copied = copy_dir_all(&source, &destination).unwrap();

        assert_eq!(copied, 5);
        assert_eq!(
            fs::read_to_string(destination.join("Content/Maps/Main.umap")).unwrap(),
            "map"
        );
        assert!(destination.join("MyGame.uproject").exists());
    }

    #[test]
    fn copy_dir_all_copies_empty_directories() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        fs::create_dir_all(source.join("Saved/Logs")).unwrap();

        let destination = temp.path().join("dst");
        copy_dir_all(&source, &destination).unwrap();

        assert!(destination.join("Saved/Logs").is_dir());
    }

    #[test]
    fn copy_dir_all_refuses_existing_destination() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        let destination = temp.path().join("dst");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&destination).unwrap();

        let result = copy_dir_all(&source, &destination);
        assert!(matches!(result, Err(SubrealError::FilesystemError(_))));
    }

    #[test]
    fn copy_dir_all_rejects_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = copy_dir_all(&temp.path().join("missing"), &temp.path().join("dst"));
        assert!(result.is_err());
        assert!(!temp.path().join("dst").exists());
    }

    #[test]
    fn dir_size_sums_files_recursively() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b")).unwrap();
        fs::write(temp.path().join("one.bin"), vec![0u8; 100]).unwrap();
        fs::write(temp.path().join("a/two.bin"), vec![0u8; 20]).unwrap();
        fs::write(temp.path().join("a/b/three.bin"), vec![0u8; 3]).unwrap();

        assert_eq!(dir_size(temp.path()), 123);
    }

    #[test]
    fn dir_size_of_missing_path_is_zero() {
        let temp = TempDir::new().unwrap();
        assert_eq!(dir_size(&temp.path().join("missing")), 0);
    }

    #[test]
    fn is_dir_empty_detects_entries() {
        let temp = TempDir::new().unwrap();
        assert!(is_dir_empty(temp.path()).unwrap());

        fs::write(temp.path().join("file"), "x").unwrap();
        assert!(!is_dir_empty(temp.path()).unwrap());
    }
}
