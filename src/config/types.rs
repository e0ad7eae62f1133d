//! Configuration types and defaults for subreal.

use serde::{Deserialize, Serialize};

/// File name used when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "subreal.yaml";

/// Host platform the engine tooling runs on.
///
/// Drives the editor binaries directory, the build script and the default
/// engine install location. It is a plain config value so path construction
/// never consults ambient OS state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Linux
        }
    }

    /// Parse a platform from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win64" => Some(Self::Windows),
            "mac" | "macos" => Some(Self::Mac),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    /// Name of the engine's per-platform binaries directory and build target.
    pub fn target_name(self) -> &'static str {
        match self {
            Self::Windows => "Win64",
            Self::Mac => "Mac",
            Self::Linux => "Linux",
        }
    }

    /// Default engine install directory for a given engine version.
    pub fn default_engine_dir(self, ue_version: &str) -> String {
        match self {
            Self::Windows => format!("C:\\Program Files\\Epic Games\\UE_{}", ue_version),
            Self::Mac => format!("/Users/Shared/Epic Games/UE_{}", ue_version),
            Self::Linux => format!("/opt/UnrealEngine/UE_{}", ue_version),
        }
    }

    /// Default editor executable file name.
    pub fn default_editor_exe(self) -> &'static str {
        match self {
            Self::Windows => "UnrealEditor.exe",
            Self::Mac | Self::Linux => "UnrealEditor",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Mac => write!(f, "mac"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_project_name() -> String {
    "Subreal".to_string()
}
pub(crate) fn default_project_root() -> String {
    ".".to_string()
}
pub(crate) fn default_ue_version() -> String {
    "5.4".to_string()
}
pub(crate) fn default_build_configuration() -> String {
    "Development".to_string()
}
pub(crate) fn default_build_timeout_secs() -> u64 {
    300
}
pub(crate) fn default_build_extra_args() -> String {
    "-waitmutex -NoHotReload".to_string()
}
