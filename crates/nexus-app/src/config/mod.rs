//! Configuration file parsing for Nexus Builder
//!
//! Supports `<config_dir>/nexus-builder/config.toml`, or any path given on
//! the command line.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_dir, load_settings, resolve_data_dir, CONFIG_FILENAME,
};
pub use types::*;
