//! Rewrites of the project's `Config/*.ini` files.

use super::types::RenameResult;
use crate::fs::atomic_write_file;
use std::path::Path;

/// Config files touched by a rename, relative to `Config/`.
pub const CONFIG_FILES: [&str; 3] = ["DefaultEngine.ini", "DefaultGame.ini", "DefaultInput.ini"];

const ENGINE_CONFIG: &str = "DefaultEngine.ini";
const ENGINE_SECTION: &str = "[/Script/Engine.Engine]";

/// Key prefixes whose old-name value is replaced.
const QUALIFIED_PREFIXES: [&str; 3] = ["GameName=", "ProjectName=", "/Script/"];

/// The redirect line that maps the old script namespace to the new one.
pub fn redirect_line(old: &str, new: &str) -> String {
    format!(
        "+ActiveGameNameRedirects=(OldGameName=\"/Script/{}\", NewGameName=\"/Script/{}\")",
        old, new
    )
}

/// Returns the rewritten config text, or `None` when nothing changed.
///
/// Substitutions run before the redirect is injected so the redirect keeps
/// its old namespace. Line endings of the input are reused for inserted
/// lines; all other lines pass through untouched.
pub fn rewrite_config(file_name: &str, content: &str, old: &str, new: &str) -> Option<String> {
    let mut updated = content.to_string();
    for prefix in QUALIFIED_PREFIXES {
        let from = format!("{}{}", prefix, old);
        if updated.contains(&from) {
            updated = updated.replace(&from, &format!("{}{}", prefix, new));
        }
    }

    if file_name == ENGINE_CONFIG {
        let redirect = redirect_line(old, new);
        if !updated.contains(&redirect) {
            updated = inject_redirect(&updated, &redirect);
        }
    }

    (updated != content).then_some(updated)
}

fn inject_redirect(content: &str, redirect: &str) -> String {
    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let mut out = String::with_capacity(content.len() + redirect.len() + 2 * eol.len());
    let mut injected = false;

    for line in content.split_inclusive('\n') {
        out.push_str(line);
        if !injected && line.trim() == ENGINE_SECTION {
            if !line.ends_with('\n') {
                out.push_str(eol);
            }
            out.push_str(redirect);
            out.push_str(eol);
            injected = true;
        }
    }

    if !injected {
        if !out.is_empty() {
            if !out.ends_with('\n') {
                out.push_str(eol);
            }
            out.push_str(eol);
        }
        out.push_str(ENGINE_SECTION);
        out.push_str(eol);
        out.push_str(redirect);
        out.push_str(eol);
    }

    out
}

/// Applies [`rewrite_config`] to each config file present in `config_dir`.
pub(crate) fn update_config_files(config_dir: &Path, old: &str, new: &str, result: &mut RenameResult) {
    for file_name in CONFIG_FILES {
        let path = config_dir.join(file_name);
        if !path.is_file() {
            continue;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                result.error(format!("Failed to read {}: {}", file_name, e));
                continue;
            }
        };

        let Some(updated) = rewrite_config(file_name, &content, old, new) else {
            continue;
        };

        match atomic_write_file(&path, &updated) {
            Ok(()) => result.change(format!("Updated {}", file_name)),
            Err(e) => result.error(format!("Failed to update {}: {}", file_name, e)),
        }
    }
}
