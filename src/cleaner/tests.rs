//! Tests for scanning, cleaning, pruning and the manifest.

use super::manifest::render_manifest;
use super::{CleanupCategory, Cleaner, EntryKind, ScanEntry, ScanResult};
use crate::test_support::write_file;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn entry_paths(scan: &ScanResult, category: CleanupCategory) -> Vec<PathBuf> {
    scan.get(category)
        .map(|s| s.entries.iter().map(|e| e.path.clone()).collect())
        .unwrap_or_default()
}

fn project_with_artifacts() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(&root.join("MyGame.uproject"), "{}");
    write_file(&root.join("Content/Hero.uasset"), "asset");
    write_file(&root.join("Binaries/Win64/MyGame.dll"), vec![0u8; 100]);
    write_file(&root.join("Binaries/Win64/MyGame.pdb"), vec![0u8; 50]);
    write_file(&root.join("Saved/Logs/MyGame.log"), vec![0u8; 10]);
    write_file(&root.join("MyGame.sln"), "sln");
    temp
}

#[test]
fn scan_covers_every_category() {
    let temp = project_with_artifacts();
    let cleaner = Cleaner::new(temp.path()).unwrap();

    let scan = cleaner.scan();

    for category in CleanupCategory::ALL {
        assert!(scan.get(category).is_some(), "{} missing", category);
    }
}

#[test]
fn scan_records_directory_and_descendants() {
    let temp = project_with_artifacts();
    let root = temp.path();
    let cleaner = Cleaner::new(root).unwrap();

    let scan = cleaner.scan();
    let temp_cache = scan.get(CleanupCategory::TempCache).unwrap();

    let binaries = temp_cache
        .entries
        .iter()
        .find(|e| e.path == root.join("Binaries"))
        .expect("Binaries directory should match");
    assert_eq!(binaries.kind, EntryKind::Directory);
    assert_eq!(binaries.size, 150);

    let dll = temp_cache
        .entries
        .iter()
        .find(|e| e.path == root.join("Binaries/Win64/MyGame.dll"))
        .expect("dll should match");
    assert_eq!(dll.kind, EntryKind::File);
    assert_eq!(dll.size, 100);

    // Binaries (150) + Win64 (150) + dll (100) + pdb (50)
    assert_eq!(temp_cache.count(), 4);
    assert_eq!(temp_cache.total_size, 450);
}

#[test]
fn scan_counts_path_once_per_matching_pattern() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    // Matches both "**/Binaries/**" and "**/*.tmp" in temp_cache.
    write_file(&root.join("Binaries/scratch.tmp"), vec![0u8; 7]);

    let scan = Cleaner::new(root).unwrap().scan();
    let paths = entry_paths(&scan, CleanupCategory::TempCache);

    let tmp = root.join("Binaries/scratch.tmp");
    assert_eq!(paths.iter().filter(|p| **p == tmp).count(), 2);
}

#[test]
fn scan_classifies_build_artifacts_and_ide_files() {
    let temp = project_with_artifacts();
    let root = temp.path();
    let scan = Cleaner::new(root).unwrap().scan();

    assert_eq!(
        entry_paths(&scan, CleanupCategory::BuildArtifacts),
        vec![
            root.join("Binaries/Win64/MyGame.pdb"),
            root.join("Saved/Logs/MyGame.log"),
        ]
    );
    assert_eq!(
        entry_paths(&scan, CleanupCategory::IdeFiles),
        vec![root.join("MyGame.sln")]
    );
    assert!(
        entry_paths(&scan, CleanupCategory::UeGenerated).contains(&root.join("Saved/Logs"))
    );
}

#[test]
fn scan_ignores_project_content() {
    let temp = project_with_artifacts();
    let root = temp.path();
    let scan = Cleaner::new(root).unwrap().scan();

    for (_, category_scan) in scan.iter() {
        for entry in &category_scan.entries {
            assert!(!entry.path.starts_with(root.join("Content")));
            assert_ne!(entry.path, root.join("MyGame.uproject"));
        }
    }
}

#[test]
fn scan_only_returns_existing_paths_with_real_sizes() {
    let temp = project_with_artifacts();
    let scan = Cleaner::new(temp.path()).unwrap().scan();

    for (_, category_scan) in scan.iter() {
        for entry in &category_scan.entries {
            assert!(entry.path.exists());
            if entry.kind == EntryKind::File {
                assert_eq!(entry.size, fs::metadata(&entry.path).unwrap().len());
            }
        }
    }
}

#[cfg(unix)]
#[test]
fn scan_skips_unreadable_entries_and_keeps_the_rest() {
    let temp = project_with_artifacts();
    let root = temp.path();
    let broken_dll = root.join("Binaries/Win64/Stale.dll");
    let broken_log = root.join("Saved/Logs/Stale.log");
    std::os::unix::fs::symlink(root.join("missing.dll"), &broken_dll).unwrap();
    std::os::unix::fs::symlink(root.join("missing.log"), &broken_log).unwrap();

    let scan = Cleaner::new(root).unwrap().scan();

    for (_, category_scan) in scan.iter() {
        for entry in &category_scan.entries {
            assert_ne!(entry.path, broken_dll);
            assert_ne!(entry.path, broken_log);
        }
    }

    let temp_cache = scan.get(CleanupCategory::TempCache).unwrap();
    let binaries = temp_cache
        .entries
        .iter()
        .find(|e| e.path == root.join("Binaries"))
        .expect("Binaries directory should still match");
    assert_eq!(binaries.size, 150);
    assert_eq!(temp_cache.count(), 4);
    assert_eq!(temp_cache.total_size, 450);

    let log_paths = entry_paths(&scan, CleanupCategory::BuildArtifacts);
    assert!(log_paths.contains(&root.join("Saved/Logs/MyGame.log")));
    let generated = scan.get(CleanupCategory::UeGenerated).unwrap();
    let logs_dir = generated
        .entries
        .iter()
        .find(|e| e.path == root.join("Saved/Logs"))
        .expect("Saved/Logs should still match");
    assert_eq!(logs_dir.size, 10);
}

#[cfg(unix)]
#[test]
fn dir_size_skips_entries_it_cannot_read() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("Intermediate");
    write_file(&dir.join("a.obj"), vec![0u8; 30]);
    write_file(&dir.join("nested/b.obj"), vec![0u8; 12]);
    std::os::unix::fs::symlink(temp.path().join("missing"), dir.join("nested/dangling")).unwrap();

    assert_eq!(crate::fs::dir_size(&dir), 42);
}

#[test]
fn scan_of_clean_project_is_empty() {
    let temp = TempDir::new().unwrap();
    write_file(&temp.path().join("MyGame.uproject"), "{}");
    write_file(&temp.path().join("Content/Hero.uasset"), "asset");

    let scan = Cleaner::new(temp.path()).unwrap().scan();
    assert!(scan.is_empty());
    assert_eq!(scan.total_count(), 0);
    assert_eq!(scan.total_size(), 0);
}

#[test]
fn clean_category_deletes_files_and_directories() {
    let temp = project_with_artifacts();
    let root = temp.path();
    let cleaner = Cleaner::new(root).unwrap();
    let scan = cleaner.scan();

    let entries = &scan.get(CleanupCategory::TempCache).unwrap().entries;
    let report = cleaner.clean_category(CleanupCategory::TempCache, entries);

    assert!(!root.join("Binaries").exists());
    // The directory goes first; its descendants are then already missing.
    assert_eq!(report.removed_count, 1);
    assert_eq!(report.removed_bytes, 150);
    assert_eq!(report.missing_count, 3);
    assert!(report.skipped.is_empty());
    assert_eq!(report.totals(), (1, 150));

    assert!(root.join("Content/Hero.uasset").exists());
}

#[test]
fn clean_category_rerun_does_not_double_count() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("crash.log");
    write_file(&path, vec![0u8; 64]);

    let cleaner = Cleaner::new(temp.path()).unwrap();
    let entries = vec![ScanEntry {
        path: path.clone(),
        size: 64,
        kind: EntryKind::File,
    }];

    let first = cleaner.clean_category(CleanupCategory::BuildArtifacts, &entries);
    assert_eq!(first.totals(), (1, 64));

    let second = cleaner.clean_category(CleanupCategory::BuildArtifacts, &entries);
    assert_eq!(second.totals(), (0, 0));
    assert_eq!(second.missing_count, 1);
}

#[test]
fn clean_category_skips_entries_it_cannot_delete() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("Temp");
    write_file(&dir.join("keep.txt"), "x");

    let cleaner = Cleaner::new(temp.path()).unwrap();
    // Recorded as a file, but it is a directory: remove_file fails.
    let entries = vec![
        ScanEntry {
            path: dir.clone(),
            size: 1,
            kind: EntryKind::File,
        },
        ScanEntry {
            path: temp.path().join("gone.tmp"),
            size: 5,
            kind: EntryKind::File,
        },
    ];

    let report = cleaner.clean_category(CleanupCategory::TempCache, &entries);

    assert_eq!(report.removed_count, 0);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].0, dir);
    assert_eq!(report.missing_count, 1);
    assert!(dir.exists());
}

#[test]
fn clean_empty_directories_is_bottom_up() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("A/B")).unwrap();
    fs::create_dir_all(root.join("C/D/E")).unwrap();

    let removed = Cleaner::new(root).unwrap().clean_empty_directories();

    assert_eq!(removed, 5);
    assert!(!root.join("A").exists());
    assert!(!root.join("C").exists());
    assert!(root.exists());
}

#[test]
fn clean_empty_directories_keeps_non_empty() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(&root.join("A/file.txt"), "keep");
    fs::create_dir_all(root.join("A/Empty")).unwrap();

    let removed = Cleaner::new(root).unwrap().clean_empty_directories();

    assert_eq!(removed, 1);
    assert!(root.join("A/file.txt").exists());
    assert!(!root.join("A/Empty").exists());
}

#[test]
fn clean_empty_directories_leaves_vcs_metadata_alone() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join(".git/refs/tags")).unwrap();

    let removed = Cleaner::new(root).unwrap().clean_empty_directories();

    assert_eq!(removed, 0);
    assert!(root.join(".git/refs/tags").exists());
}

#[test]
fn is_safe_follows_category_policy() {
    let temp = TempDir::new().unwrap();
    let cleaner = Cleaner::new(temp.path()).unwrap();

    assert!(cleaner.is_safe(CleanupCategory::TempCache));
    assert!(cleaner.is_safe(CleanupCategory::AssetCache));
    assert!(!cleaner.is_safe(CleanupCategory::IdeFiles));
    assert!(!cleaner.is_safe(CleanupCategory::VcsArtifacts));
    assert_eq!(
        cleaner.category_description(CleanupCategory::UeGenerated),
        "Unreal Engine generated files"
    );
}

#[test]
fn manifest_lists_non_empty_categories() {
    let mut scan = ScanResult::default();
    let root = Path::new("/projects/MyGame");
    let mut category_scan = super::CategoryScan::default();
    category_scan.entries.push(ScanEntry {
        path: root.join("Binaries"),
        size: 2048,
        kind: EntryKind::Directory,
    });
    category_scan.total_size = 2048;
    scan.categories
        .insert(CleanupCategory::TempCache, category_scan);
    scan.categories
        .insert(CleanupCategory::IdeFiles, Default::default());

    let text = render_manifest(root, &scan, "2026-01-02 03:04:05");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Subreal Project Cleanup Backup List");
    assert_eq!(lines[1], "Generated: 2026-01-02 03:04:05");
    assert_eq!(lines[2], "Project: /projects/MyGame");
    assert_eq!(lines[3], "=".repeat(60));
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "Category: Temporary files and build cache");
    assert_eq!(lines[6], "Files: 1, Size: 2.0 KB");
    assert_eq!(lines[7], "-".repeat(40));
    assert_eq!(
        lines[8],
        format!("directory: {}", root.join("Binaries").display())
    );
    assert_eq!(lines[9], "");
    assert!(!text.contains("IDE project files"));
}

#[test]
fn write_backup_manifest_creates_file_without_deleting() {
    let temp = project_with_artifacts();
    let root = temp.path();
    let cleaner = Cleaner::new(root).unwrap();
    let scan = cleaner.scan();

    let path = cleaner.write_backup_manifest(&scan).unwrap();

    assert!(path.starts_with(root));
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("cleanup_backup_"));
    assert!(name.ends_with(".txt"));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("MyGame.dll"));
    assert!(root.join("Binaries/Win64/MyGame.dll").exists());
}
