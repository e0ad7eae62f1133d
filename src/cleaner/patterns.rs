//! Compiled glob patterns for cleanup categories.

use super::category::CleanupCategory;
use crate::error::{Result, SubrealError};
use globset::{GlobBuilder, GlobMatcher};
use std::path::Path;

/// One compiled cleanup pattern.
///
/// `*` never crosses a path separator; `**` spans any number of directories.
/// A pattern ending in `/**` also matches the directory it is anchored on, so
/// `**/Binaries/**` yields the `Binaries` directory itself as well as every
/// file and directory below it.
pub struct CompiledPattern {
    pattern: String,
    matcher: GlobMatcher,
    anchor: Option<GlobMatcher>,
}

impl std::fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledPattern")
            .field("pattern", &self.pattern)
            .field("anchored", &self.anchor.is_some())
            .finish()
    }
}

impl CompiledPattern {
    /// Compile a project-relative glob pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        let matcher = compile(pattern)?;
        let anchor = match pattern.strip_suffix("/**") {
            Some(prefix) if !prefix.is_empty() => Some(compile(prefix)?),
            _ => None,
        };

        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
            anchor,
        })
    }

    /// The source pattern text.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether a project-relative path (forward slashes) matches.
    pub fn matches(&self, relative: &str, is_dir: bool) -> bool {
        if self.matcher.is_match(relative) {
            return true;
        }
        is_dir
            && self
                .anchor
                .as_ref()
                .is_some_and(|anchor| anchor.is_match(relative))
    }
}

fn compile(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            SubrealError::UserError(format!("invalid cleanup pattern '{}': {}", pattern, e))
        })
}

/// A category with its compiled patterns and its safety flag.
///
/// The flag is copied from the category when the rules are built and never
/// changes afterwards.
#[derive(Debug)]
pub struct CategoryRules {
    pub category: CleanupCategory,
    pub safe: bool,
    pub patterns: Vec<CompiledPattern>,
}

impl CategoryRules {
    /// Compile the built-in pattern table for a category.
    pub fn for_category(category: CleanupCategory) -> Result<Self> {
        let patterns = category
            .patterns()
            .iter()
            .map(|pattern| CompiledPattern::new(pattern))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            category,
            safe: category.is_safe(),
            patterns,
        })
    }
}

/// Render a relative path with forward slashes for glob matching.
pub fn to_match_path(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recursive_dir_pattern_matches_descendants_and_anchor() {
        let pattern = CompiledPattern::new("**/Binaries/**").unwrap();

        assert!(pattern.matches("Binaries", true));
        assert!(pattern.matches("Binaries/Win64", true));
        assert!(pattern.matches("Binaries/Win64/MyGame.dll", false));
        assert!(pattern.matches("Plugins/Foo/Binaries/Win64/Foo.dll", false));
        assert!(!pattern.matches("Content/Binaries.uasset", false));
        assert!(!pattern.matches("OtherBinaries/x", false));
    }

    #[test]
    fn anchor_only_matches_directories() {
        let pattern = CompiledPattern::new("**/Temp/**").unwrap();
        assert!(pattern.matches("Temp", true));
        assert!(!pattern.matches("Temp", false));
    }

    #[test]
    fn extension_pattern_matches_any_depth() {
        let pattern = CompiledPattern::new("**/*.log").unwrap();
        assert!(pattern.matches("build.log", false));
        assert!(pattern.matches("Saved/Logs/MyGame.log", false));
        assert!(!pattern.matches("Saved/Logs/MyGame.log.txt", false));
    }

    #[test]
    fn single_star_does_not_cross_separator() {
        let pattern = CompiledPattern::new("**/cmake-build-*/**").unwrap();
        assert!(pattern.matches("cmake-build-debug", true));
        assert!(pattern.matches("cmake-build-debug/CMakeCache.txt", false));
        assert!(!pattern.matches("cmake/build-x", true));
        assert!(!pattern.matches("src/cmake-build", true));
    }

    #[test]
    fn nested_literal_pattern() {
        let pattern = CompiledPattern::new("**/Saved/AssetRegistry.bin").unwrap();
        assert!(pattern.matches("Saved/AssetRegistry.bin", false));
        assert!(!pattern.matches("AssetRegistry.bin", false));
    }

    #[test]
    fn builtin_patterns_compile() {
        for category in CleanupCategory::ALL {
            let rules = CategoryRules::for_category(category).unwrap();
            assert_eq!(rules.patterns.len(), category.patterns().len());
            assert_eq!(rules.safe, category.is_safe());
        }
    }

    #[test]
    fn match_path_uses_forward_slashes() {
        let path = Path::new("Saved").join("Logs").join("a.log");
        assert_eq!(to_match_path(&path), "Saved/Logs/a.log");
    }
}
