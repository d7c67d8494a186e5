//! Configuration types for Nexus Builder
//!
//! Defines:
//! - `Settings` - Global application settings (config.toml)
//! - Per-section settings structs with serde defaults

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use nexus_core::prelude::*;
use nexus_core::SystemConfig;
use nexus_genai::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL};

/// Application settings (`<config_dir>/nexus-builder/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub deployment: DeploymentSettings,

    /// Initial system configuration shown in the admin view
    #[serde(default)]
    pub defaults: SystemConfig,
}

/// Generation service connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key (`API_KEY` is tried next)
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiSettings {
    /// Parsed base URL
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| {
            Error::config_invalid(format!("api.base_url '{}' is not a URL: {}", self.base_url, e))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Overrides the platform data directory for stored projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Timing of the simulated deployment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeploymentSettings {
    /// Delay between log lines
    #[serde(default = "default_log_interval_ms")]
    pub log_interval_ms: u64,

    /// Delay between the last log line and the finished state
    #[serde(default = "default_finalize_delay_ms")]
    pub finalize_delay_ms: u64,
}

impl Default for DeploymentSettings {
    fn default() -> Self {
        Self {
            log_interval_ms: default_log_interval_ms(),
            finalize_delay_ms: default_finalize_delay_ms(),
        }
    }
}

fn default_log_interval_ms() -> u64 {
    450
}

fn default_finalize_delay_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.api_key_env, "GEMINI_API_KEY");
        assert_eq!(settings.api.timeout(), Duration::from_secs(120));
        assert_eq!(settings.deployment.log_interval_ms, 450);
        assert_eq!(settings.deployment.finalize_delay_ms, 1000);
        assert_eq!(settings.defaults.ai_model, "gemini-3-pro-preview");
        assert!(settings.storage.data_dir.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [deployment]
            log_interval_ms = 10

            [defaults]
            ai_model = "gemini-3-flash-preview"
            "#,
        )
        .unwrap();

        assert_eq!(settings.deployment.log_interval_ms, 10);
        assert_eq!(settings.deployment.finalize_delay_ms, 1000);
        assert_eq!(settings.defaults.ai_model, "gemini-3-flash-preview");
        assert_eq!(settings.defaults.max_user_projects, 5);
        assert_eq!(settings.api, ApiSettings::default());
    }

    #[test]
    fn test_invalid_base_url() {
        let api = ApiSettings {
            base_url: "not a url".into(),
            ..Default::default()
        };
        assert!(matches!(api.base_url(), Err(Error::ConfigInvalid { .. })));
    }
}
