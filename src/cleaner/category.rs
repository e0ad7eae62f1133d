//! Fixed cleanup categories and their pattern tables.

use serde::Serialize;

/// A class of disposable files inside an Unreal project.
///
/// Categories are ordered; scan results and manifests list them in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupCategory {
    TempCache,
    BuildArtifacts,
    IdeFiles,
    UeGenerated,
    AssetCache,
    VcsArtifacts,
}

impl CleanupCategory {
    /// Every category, in scan order.
    pub const ALL: [CleanupCategory; 6] = [
        CleanupCategory::TempCache,
        CleanupCategory::BuildArtifacts,
        CleanupCategory::IdeFiles,
        CleanupCategory::UeGenerated,
        CleanupCategory::AssetCache,
        CleanupCategory::VcsArtifacts,
    ];

    /// Stable snake_case identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::TempCache => "temp_cache",
            Self::BuildArtifacts => "build_artifacts",
            Self::IdeFiles => "ide_files",
            Self::UeGenerated => "ue_generated",
            Self::AssetCache => "asset_cache",
            Self::VcsArtifacts => "vcs_artifacts",
        }
    }

    /// Parse a category from its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }

    /// Human-readable label.
    pub fn description(self) -> &'static str {
        match self {
            Self::TempCache => "Temporary files and build cache",
            Self::BuildArtifacts => "Compiled binaries and build logs",
            Self::IdeFiles => "IDE project files (can be regenerated)",
            Self::UeGenerated => "Unreal Engine generated files",
            Self::AssetCache => "Cooked assets and shader cache",
            Self::VcsArtifacts => "Version control system files",
        }
    }

    /// Whether everything in this category can be deleted without losing work.
    ///
    /// IDE files and VCS metadata are excluded: they can hold unsynced work or
    /// project state that is not trivially regenerated.
    pub fn is_safe(self) -> bool {
        match self {
            Self::TempCache | Self::BuildArtifacts | Self::UeGenerated | Self::AssetCache => true,
            Self::IdeFiles | Self::VcsArtifacts => false,
        }
    }

    /// Glob patterns, relative to the project directory.
    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Self::TempCache => &[
                "**/Binaries/**",
                "**/Intermediate/**",
                "**/DerivedDataCache/**",
                "**/.vs/**",
                "**/.vscode/**",
                "**/obj/**",
                "**/bin/**",
                "**/*.tmp",
                "**/*.temp",
                "**/Temp/**",
            ],
            Self::BuildArtifacts => &[
                "**/*.pdb",
                "**/*.idb",
                "**/*.ilk",
                "**/*.obj",
                "**/*.pch",
                "**/*.tlog",
                "**/*.log",
                "**/*.iobj",
                "**/*.ipdb",
                "**/BuildLogs/**",
            ],
            Self::IdeFiles => &[
                "**/*.sln",
                "**/*.vcxproj",
                "**/*.vcxproj.filters",
                "**/*.vcxproj.user",
                "**/*.xcworkspace",
                "**/*.xcodeproj",
                "**/.idea/**",
                "**/cmake-build-*/**",
            ],
            Self::UeGenerated => &[
                "**/Saved/Logs/**",
                "**/Saved/Crashes/**",
                "**/Saved/Profiling/**",
                "**/Saved/Backup/**",
                "**/Saved/Config/CrashReportClient/**",
                "**/Saved/Autosaves/**",
                "**/Saved/CollectionCache/**",
                "**/Saved/MaterialStatsCache/**",
                "**/Saved/ShaderDebugInfo/**",
            ],
            Self::AssetCache => &[
                "**/Saved/Cooked/**",
                "**/Saved/StagedBuilds/**",
                "**/Saved/AssetRegistry.bin",
                "**/Saved/CachedShaderDebugFiles/**",
                "**/Saved/Shaders/**",
            ],
            Self::VcsArtifacts => &[
                "**/.git/**",
                "**/.svn/**",
                "**/.hg/**",
                "**/.p4root/**",
                "**/*.orig",
                "**/*.rej",
            ],
        }
    }
}

impl std::fmt::Display for CleanupCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Describe a category given only its identifier.
///
/// Known identifiers get their fixed label; anything else is title-cased
/// (`"shader_dumps"` becomes `"Shader Dumps"`).
pub fn describe_category_id(id: &str) -> String {
    match CleanupCategory::from_id(id) {
        Some(category) => category.description().to_string(),
        None => id
            .split('_')
            .filter(|word| !word.is_empty())
            .map(title_case_word)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
