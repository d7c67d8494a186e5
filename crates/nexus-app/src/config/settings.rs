//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use nexus_core::logging::{data_directory, APP_DIR_NAME};
use nexus_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/nexus-builder/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
}

/// Load settings from `path`.
///
/// A missing or unparsable file yields defaults; problems are logged, never fatal.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file into `dir` unless one exists.
///
/// Returns the config file path.
pub fn init_config_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Nexus Builder Configuration

[api]
base_url = "https://generativelanguage.googleapis.com/v1beta"
api_key_env = "GEMINI_API_KEY"   # API_KEY is tried when this is unset
timeout_secs = 120

[storage]
# data_dir = "/path/to/projects"  # Defaults to the platform data directory

[deployment]
log_interval_ms = 450
finalize_delay_ms = 1000

[defaults]
ai_model = "gemini-3-pro-preview"
monetization_enabled = true
auto_test_enabled = true
max_user_projects = 5
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

/// Directory holding stored projects: the configured override, else the
/// platform data directory
pub fn resolve_data_dir(settings: &Settings) -> PathBuf {
    settings
        .storage
        .data_dir
        .clone()
        .unwrap_or_else(data_directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("nope.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_invalid_toml_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[api\nbase_url = ").unwrap();
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_dir_writes_parsable_defaults() {
        let dir = tempdir().unwrap();
        let path = init_config_dir(&dir.path().join("nexus-builder")).unwrap();
        assert!(path.exists());
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[deployment]\nlog_interval_ms = 5\n").unwrap();

        init_config_dir(dir.path()).unwrap();
        assert_eq!(load_settings(&path).deployment.log_interval_ms, 5);
    }

    #[test]
    fn test_resolve_data_dir_prefers_override() {
        let mut settings = Settings::default();
        assert!(resolve_data_dir(&settings).ends_with(APP_DIR_NAME));
        settings.storage.data_dir = Some(PathBuf::from("/tmp/nexus-data"));
        assert_eq!(resolve_data_dir(&settings), PathBuf::from("/tmp/nexus-data"));
    }
}
