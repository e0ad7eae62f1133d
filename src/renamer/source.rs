//! Renames and content rewrites under `Source/` for C++ projects.

use super::detect::module_dirs;
use super::types::RenameResult;
use crate::fs::atomic_write_file;
use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Kind of source file whose contents get rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Header,
    Implementation,
    /// `*.Build.cs` and `*.Target.cs` rules files.
    BuildRules,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "h" => Some(SourceKind::Header),
            "cpp" => Some(SourceKind::Implementation),
            "cs" => Some(SourceKind::BuildRules),
            _ => None,
        }
    }
}

/// A file under `Source/` before and after the rename, as `/`-separated
/// paths relative to `Source/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedFile {
    pub from: String,
    pub to: String,
}

impl MovedFile {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Ordered textual substitutions from one project name to another.
///
/// Names are escaped before they enter any pattern, so characters with a
/// regex meaning match only themselves. Include directives are only rewritten
/// when their target names one of the moved files.
#[derive(Debug, Clone)]
pub struct SourceRewriter {
    old: String,
    new: String,
    moved: Vec<MovedFile>,
    include: Regex,
    module_macro: Regex,
    api_macro: Regex,
    rules_class: Regex,
}

impl SourceRewriter {
    pub fn new(old: &str, new: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(old);
        let escaped_upper = regex::escape(&old.to_uppercase());

        Ok(Self {
            old: old.to_string(),
            new: new.to_string(),
            moved: Vec::new(),
            include: Regex::new(r#"(#include\s*")([^"\r\n]*)(")"#)?,
            module_macro: Regex::new(&format!(
                r"(IMPLEMENT_(?:PRIMARY_GAME_|GAME_)?MODULE\s*\(\s*[^,()]+,\s*){}(\s*[,)])",
                escaped
            ))?,
            api_macro: Regex::new(&format!(r"(^|[^A-Za-z0-9_]){}_API\b", escaped_upper))?,
            rules_class: Regex::new(&format!(
                r"(\b(?:class|public)\s+){}((?:Editor)?Target)?(\s*[:(])",
                escaped
            ))?,
        })
    }

    /// Registers files moved by the rename. A moved header also covers its
    /// `.generated.h` counterpart.
    pub fn with_moved_files(mut self, moved: impl IntoIterator<Item = MovedFile>) -> Self {
        for file in moved {
            if file.from == file.to {
                continue;
            }
            if let (Some(from), Some(to)) = (file.from.strip_suffix(".h"), file.to.strip_suffix(".h"))
                && !from.ends_with(".generated")
            {
                self.moved
                    .push(MovedFile::new(format!("{from}.generated.h"), format!("{to}.generated.h")));
            }
            self.moved.push(file);
        }
        self
    }

    /// Returns rewritten content, or `None` when no rule applied.
    ///
    /// Rules, in order: include targets, module implementation macro
    /// argument, `<NAME>_API` export macro, rules class and constructor
    /// names (build rules only), then the quoted name literal.
    pub fn rewrite(&self, content: &str, kind: SourceKind) -> Option<String> {
        let mut text = self
            .include
            .replace_all(content, |caps: &Captures| match self.include_target(&caps[2]) {
                Some(target) => format!("{}{}{}", &caps[1], target, &caps[3]),
                None => caps[0].to_string(),
            })
            .into_owned();

        text = self
            .module_macro
            .replace_all(&text, |caps: &Captures| {
                format!("{}{}{}", &caps[1], self.new, &caps[2])
            })
            .into_owned();

        let new_api = format!("{}_API", self.new.to_uppercase());
        text = self
            .api_macro
            .replace_all(&text, |caps: &Captures| format!("{}{}", &caps[1], new_api))
            .into_owned();

        if kind == SourceKind::BuildRules {
            text = self
                .rules_class
                .replace_all(&text, |caps: &Captures| {
                    let suffix = caps.get(2).map_or("", |m| m.as_str());
                    format!("{}{}{}{}", &caps[1], self.new, suffix, &caps[3])
                })
                .into_owned();
        }

        let quoted_old = format!("\"{}\"", self.old);
        if text.contains(&quoted_old) {
            text = text.replace(&quoted_old, &format!("\"{}\"", self.new));
        }

        (text != content).then_some(text)
    }

    /// New target for an include whose path is a trailing run of segments
    /// of a moved file's old path, or `None` for anything else.
    fn include_target(&self, target: &str) -> Option<String> {
        let wanted: Vec<&str> = target.split('/').collect();
        self.moved.iter().find_map(|file| {
            let from: Vec<&str> = file.from.split('/').collect();
            let to: Vec<&str> = file.to.split('/').collect();
            if wanted.len() > to.len() || !from.ends_with(&wanted) {
                return None;
            }
            let renamed = to[to.len() - wanted.len()..].join("/");
            (renamed != target).then_some(renamed)
        })
    }
}

/// Renames the module directory and files, then rewrites source contents.
pub(crate) fn update_source_tree(source_dir: &Path, old: &str, new: &str, result: &mut RenameResult) {
    if !source_dir.is_dir() {
        return;
    }

    let old_module = source_dir.join(old);
    let mut module_moved = true;
    let mut module_renamed = false;
    if old_module.is_dir() {
        let new_module = source_dir.join(new);
        if new_module.exists() {
            result.error(format!(
                "Cannot rename module {}: Source/{} already exists",
                old, new
            ));
            module_moved = false;
        } else {
            match fs::rename(&old_module, &new_module) {
                Ok(()) => {
                    result.change(format!("Renamed module Source/{} -> Source/{}", old, new));
                    module_renamed = true;
                }
                Err(e) => {
                    result.error(format!("Failed to rename module {}: {}", old, e));
                    module_moved = false;
                }
            }
        }
    }

    let mut moved = Vec::new();
    for (name, module_dir) in module_dirs(source_dir) {
        if !module_moved && name == old {
            continue;
        }
        let files: Vec<(PathBuf, String)> = WalkDir::new(&module_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let path = e.into_path();
                let current = relative_path(source_dir, &path);
                let origin = if module_renamed && name == new {
                    current.replacen(new, old, 1)
                } else {
                    current
                };
                (path, origin)
            })
            .collect();
        rename_files(source_dir, &files, old, new, result, &mut moved);
    }

    // Target rules live directly under Source/.
    let top_level: Vec<(PathBuf, String)> = match fs::read_dir(source_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_ok_and(|t| t.is_file()))
            .map(|e| {
                let path = e.path();
                let origin = relative_path(source_dir, &path);
                (path, origin)
            })
            .collect(),
        Err(e) => {
            result.error(format!("Failed to list Source: {}", e));
            Vec::new()
        }
    };
    rename_files(source_dir, &top_level, old, new, result, &mut moved);

    if !module_moved {
        result.error("Skipped source content update: module directory was not renamed");
        return;
    }

    let rewriter = match SourceRewriter::new(old, new) {
        Ok(rewriter) => rewriter.with_moved_files(moved),
        Err(e) => {
            result.error(format!("Failed to build source rewrite rules: {}", e));
            return;
        }
    };
    rewrite_sources(source_dir, &rewriter, result);
}

/// Renames files whose name contains `old` and records where every file,
/// renamed or not, ended up relative to where it started.
fn rename_files(
    source_dir: &Path,
    files: &[(PathBuf, String)],
    old: &str,
    new: &str,
    result: &mut RenameResult,
    moved: &mut Vec<MovedFile>,
) {
    for (path, origin) in files {
        let location =
            rename_file(source_dir, path, old, new, result).unwrap_or_else(|| path.clone());
        moved.push(MovedFile::new(origin.clone(), relative_path(source_dir, &location)));
    }
}

/// New location of `path` when it was renamed.
fn rename_file(
    source_dir: &Path,
    path: &Path,
    old: &str,
    new: &str,
    result: &mut RenameResult,
) -> Option<PathBuf> {
    let file_name = path.file_name()?.to_str()?;
    if !file_name.contains(old) {
        return None;
    }

    let target = path.with_file_name(file_name.replace(old, new));
    let shown = display_relative(source_dir, path);
    if target.exists() {
        result.error(format!(
            "Cannot rename {}: {} already exists",
            shown,
            display_relative(source_dir, &target)
        ));
        return None;
    }

    match fs::rename(path, &target) {
        Ok(()) => {
            result.change(format!(
                "Renamed {} -> {}",
                shown,
                display_relative(source_dir, &target)
            ));
            Some(target)
        }
        Err(e) => {
            result.error(format!("Failed to rename {}: {}", shown, e));
            None
        }
    }
}

/// `/`-separated path of `path` below `source_dir`.
fn relative_path(source_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(source_dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// `Source/...` path for change descriptions.
fn display_relative(source_dir: &Path, path: &Path) -> String {
    format!("Source/{}", relative_path(source_dir, path))
}
