//! Category selection for the clean command.

use super::types::CleanPlan;
use crate::cleaner::{Cleaner, CleanupCategory};
use crate::cli::CleanArgs;
use crate::error::{Result, SubrealError};

/// Scan the project and pick the categories to delete.
pub fn build_clean_plan(cleaner: &Cleaner, args: &CleanArgs) -> Result<CleanPlan> {
    let categories = select_categories(cleaner, &args.categories)?;
    let scan = cleaner.scan();
    Ok(CleanPlan { categories, scan })
}

/// Resolve `--category` names, or every safe category when none are given.
///
/// Unknown names and categories that are not safe to delete are rejected.
pub fn select_categories(cleaner: &Cleaner, names: &[String]) -> Result<Vec<CleanupCategory>> {
    if names.is_empty() {
        return Ok(CleanupCategory::ALL
            .into_iter()
            .filter(|c| cleaner.is_safe(*c))
            .collect());
    }

    let mut selected = Vec::new();
    for name in names {
        let name = name.trim();
        let category = CleanupCategory::from_id(name).ok_or_else(|| {
            SubrealError::UserError(format!(
                "unknown category '{}'\nValid categories: {}",
                name,
                CleanupCategory::ALL.map(|c| c.id()).join(", ")
            ))
        })?;

        if !cleaner.is_safe(category) {
            return Err(SubrealError::UserError(format!(
                "category '{}' is not safe to delete automatically\n\
                 Fix: review and remove {} by hand.",
                name,
                category.description()
            )));
        }

        if !selected.contains(&category) {
            selected.push(category);
        }
    }

    selected.sort();
    Ok(selected)
}
