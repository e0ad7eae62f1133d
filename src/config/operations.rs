//! Config loading, validation, and path helpers.

use super::model::Config;
use super::types::Platform;
use crate::error::{Result, SubrealError};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SubrealError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, using defaults when the file does not exist.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SubrealError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SubrealError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate and atomically write the config to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        atomic_write_file(path, &self.to_yaml()?)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `project_name` must not be blank
    /// - `build_timeout_secs` must be positive
    /// - `build_extra_args` must split under shell quoting rules
    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(SubrealError::UserError(
                "config validation failed: project_name must not be empty".to_string(),
            ));
        }

        if self.build_timeout_secs == 0 {
            return Err(SubrealError::UserError(
                "config validation failed: build_timeout_secs must be greater than 0".to_string(),
            ));
        }

        self.extra_build_args()?;

        Ok(())
    }

    /// Engine install directory, configured or platform default.
    pub fn engine_dir(&self) -> PathBuf {
        match &self.ue_dir {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(self.platform.default_engine_dir(&self.ue_version)),
        }
    }

    /// Editor executable file name, configured or platform default.
    pub fn editor_exe_name(&self) -> &str {
        self.editor_exe_name
            .as_deref()
            .unwrap_or_else(|| self.platform.default_editor_exe())
    }

    /// Directory that contains the project directory.
    pub fn project_root_path(&self) -> PathBuf {
        PathBuf::from(&self.project_root)
    }

    /// The project directory, `<project_root>/<project_name>`.
    pub fn project_dir(&self) -> PathBuf {
        self.project_root_path().join(&self.project_name)
    }

    /// The project descriptor, `<project_dir>/<project_name>.uproject`.
    pub fn descriptor_path(&self) -> PathBuf {
        self.project_dir()
            .join(format!("{}.uproject", self.project_name))
    }

    /// `build_extra_args` split into individual arguments.
    pub fn extra_build_args(&self) -> Result<Vec<String>> {
        shell_words::split(&self.build_extra_args).map_err(|e| {
            SubrealError::UserError(format!(
                "config validation failed: build_extra_args is not valid shell syntax: {}",
                e
            ))
        })
    }

    /// Set a single field from its YAML key and a string value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "project_name" => self.project_name = value.to_string(),
            "project_root" => self.project_root = value.to_string(),
            "ue_version" => self.ue_version = value.to_string(),
            "ue_dir" => self.ue_dir = non_empty(value),
            "editor_exe_name" => self.editor_exe_name = non_empty(value),
            "platform" => {
                self.platform = Platform::from_str(value).ok_or_else(|| {
                    SubrealError::UserError(format!(
                        "invalid platform '{}' (expected windows, mac or linux)",
                        value
                    ))
                })?;
            }
            "build_configuration" => self.build_configuration = value.to_string(),
            "build_timeout_secs" => {
                self.build_timeout_secs = value.parse().map_err(|_| {
                    SubrealError::UserError(format!(
                        "build_timeout_secs must be a whole number of seconds, got '{}'",
                        value
                    ))
                })?;
            }
            "build_extra_args" => self.build_extra_args = value.to_string(),
            other => {
                return Err(SubrealError::UserError(format!(
                    "unknown config key '{}'",
                    other
                )));
            }
        }

        self.validate()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
