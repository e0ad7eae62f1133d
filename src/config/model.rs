//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a subreal-managed project.
///
/// The project directory is `<project_root>/<project_name>` and its descriptor
/// is `<project_name>.uproject` inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Project settings
    // =========================================================================
    /// Name of the project (directory and descriptor stem).
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Directory that contains the project directory.
    #[serde(default = "default_project_root")]
    pub project_root: String,

    // =========================================================================
    // Engine settings
    // =========================================================================
    /// Engine version, used for the default install directory.
    #[serde(default = "default_ue_version")]
    pub ue_version: String,

    /// Engine install directory. Falls back to the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ue_dir: Option<String>,

    /// Editor executable file name. Falls back to the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_exe_name: Option<String>,

    /// Platform used to build engine paths.
    #[serde(default)]
    pub platform: Platform,

    // =========================================================================
    // Build settings
    // =========================================================================
    /// Build configuration passed to the build tool.
    #[serde(default = "default_build_configuration")]
    pub build_configuration: String,

    /// Seconds to wait for the build tool before killing it.
    #[serde(default = "default_build_timeout_secs")]
    pub build_timeout_secs: u64,

    /// Extra build tool arguments, split with shell quoting rules.
    #[serde(default = "default_build_extra_args")]
    pub build_extra_args: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            project_root: default_project_root(),
            ue_version: default_ue_version(),
            ue_dir: None,
            editor_exe_name: None,
            platform: Platform::default(),
            build_configuration: default_build_configuration(),
            build_timeout_secs: default_build_timeout_secs(),
            build_extra_args: default_build_extra_args(),
        }
    }
}
