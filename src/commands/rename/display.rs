//! Output for the rename command.

use crate::renamer::{ProjectInfo, ProjectType, RenameResult, Renamer};

/// Print what the rename is going to touch.
pub fn print_rename_preview(renamer: &Renamer, info: &ProjectInfo, new_name: &str) {
    println!(
        "Rename {} ({} project) -> {}",
        renamer.current_name(),
        info.project_type,
        new_name
    );
    println!();
    println!("Steps:");
    println!("  1. Back up {}", renamer.project_dir().display());
    println!(
        "  2. Rename {}.uproject and update its module references",
        renamer.current_name()
    );
    println!("  3. Update Config/*.ini and add a script redirect");
    if info.project_type == ProjectType::Cpp {
        println!(
            "  4. Rename modules and files under Source ({} module(s), {} source file(s), {} build file(s))",
            info.modules.len(),
            info.source_files.len(),
            info.build_files.len()
        );
    }
    println!("  -  Delete Binaries, Intermediate and Saved/.vs");
    println!(
        "  -  Move the project directory to {}",
        renamer.project_root().join(new_name).display()
    );
}

/// Print accumulated changes and errors.
pub fn print_rename_result(result: &RenameResult) {
    if !result.changes.is_empty() {
        println!();
        println!("Changes:");
        for change in &result.changes {
            println!("  - {}", change);
        }
    }

    if !result.errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &result.errors {
            println!("  - {}", error);
        }
    }
}
