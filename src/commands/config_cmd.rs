//! `subreal config show` and `subreal config set`.

use super::load_config;
use crate::cli::ConfigSetArgs;
use crate::error::Result;
use std::path::Path;

pub fn cmd_config_show(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Update one key and save, creating the file if needed.
pub fn cmd_config_set(config_path: &Path, args: ConfigSetArgs) -> Result<()> {
    let mut config = load_config(config_path)?;
    config.set(&args.key, &args.value)?;
    config.save(config_path)?;

    log::info!("Set {} in {}", args.key, config_path.display());
    println!("{} = {}", args.key, args.value);
    Ok(())
}
