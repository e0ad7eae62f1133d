//! Configuration model for subreal.
//!
//! This module defines the Config struct that represents `subreal.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::{DEFAULT_CONFIG_FILE, Platform};
