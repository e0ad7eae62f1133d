//! Config fixtures shared by command tests.

use crate::config::{Config, Platform};
use std::path::{Path, PathBuf};

/// Write a config for `<root>/<name>` next to it and return the config path.
pub(crate) fn write_config(root: &Path, name: &str) -> PathBuf {
    let config = Config {
        project_name: name.to_string(),
        project_root: root.to_string_lossy().into_owned(),
        ue_dir: Some(root.join("ue").to_string_lossy().into_owned()),
        platform: Platform::Linux,
        ..Default::default()
    };
    let path = root.join("subreal.yaml");
    config.save(&path).unwrap();
    path
}
