//! Nexus Builder - describe an app in the terminal, get a synthetic codebase
//!
//! Binary entry point: command line, error reporting and logging, then the
//! Engine is handed to the terminal UI.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;
use tracing::{info, warn};

use nexus_app::config::{self, Settings};
use nexus_app::{Engine, Message, ProjectRepository};
use nexus_core::UserRole;
use nexus_genai::GeminiClient;

/// Nexus Builder - a terminal AI app builder
#[derive(Parser, Debug)]
#[command(name = "nexus", version)]
#[command(about = "Describe an app, get a synthetic codebase", long_about = None)]
struct Args {
    /// Config file (default: <config_dir>/nexus-builder/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory for stored projects
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Sign in immediately, skipping the landing screen
    #[arg(long, value_enum)]
    role: Option<RoleArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    User,
    Admin,
    SuperAdmin,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::User => UserRole::User,
            RoleArg::Admin => UserRole::Admin,
            RoleArg::SuperAdmin => UserRole::SuperAdmin,
        }
    }
}

/// Settings from the config file, with command-line overrides applied
fn load_settings(args: &Args) -> Settings {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => config::default_config_path().map(|path| ensure_default_config(&path)),
    };
    let mut settings = match path {
        Some(path) => config::load_settings(&path),
        None => Settings::default(),
    };
    if let Some(dir) = &args.data_dir {
        settings.storage.data_dir = Some(dir.clone());
    }
    settings
}

/// Write the commented default config on first run. Failure only costs the
/// template; settings still fall back to defaults.
fn ensure_default_config(path: &Path) -> PathBuf {
    if path.exists() {
        return path.to_path_buf();
    }
    let Some(dir) = path.parent() else {
        return path.to_path_buf();
    };
    match config::init_config_dir(dir) {
        Ok(created) => created,
        Err(e) => {
            warn!("Could not write default config: {}", e);
            path.to_path_buf()
        }
    }
}

/// Client for the configured endpoint. A missing key is not fatal: the UI
/// starts and each AI action reports the problem.
fn build_client(settings: &Settings) -> nexus_core::Result<GeminiClient> {
    let api = &settings.api;
    let base_url = api.base_url()?;
    match GeminiClient::from_env(&api.api_key_env, base_url.clone(), api.timeout()) {
        Ok(client) => Ok(client),
        Err(e) => {
            warn!("{}; AI actions will fail until it is set", e);
            Ok(GeminiClient::unauthenticated(
                &api.api_key_env,
                base_url,
                api.timeout(),
            ))
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Log to file, the TUI owns stdout
    nexus_core::logging::init()?;

    let settings = load_settings(&args);
    let client = build_client(&settings)?;
    let data_dir = config::resolve_data_dir(&settings);
    info!("Project storage: {}", data_dir.display());

    let mut engine = Engine::new(settings, ProjectRepository::in_dir(&data_dir), client)
        .wrap_err_with(|| format!("Failed to load projects from {}", data_dir.display()))?;

    if let Some(role) = args.role {
        engine.process_message(Message::Login(role.into()));
    }

    nexus_tui::run(engine).await?;
    info!("Nexus Builder exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_role_flag() {
        let args = Args::try_parse_from(["nexus", "--role", "super-admin"]).unwrap();
        assert_eq!(args.role, Some(RoleArg::SuperAdmin));
        assert_eq!(UserRole::from(RoleArg::SuperAdmin), UserRole::SuperAdmin);
    }

    #[test]
    fn test_rejects_unknown_role() {
        assert!(Args::try_parse_from(["nexus", "--role", "root"]).is_err());
    }

    #[test]
    fn test_data_dir_overrides_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage]\ndata_dir = \"/from/config\"\n").unwrap();

        let args = Args::try_parse_from([
            "nexus",
            "--config",
            config_path.to_str().unwrap(),
            "--data-dir",
            "/from/cli",
        ])
        .unwrap();
        let settings = load_settings(&args);
        assert_eq!(settings.storage.data_dir, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn test_config_file_is_read() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "[defaults]\nmax_user_projects = 9\n").unwrap();

        let args = Args::try_parse_from(["nexus", "--config", config_path.to_str().unwrap()])
            .unwrap();
        assert_eq!(load_settings(&args).defaults.max_user_projects, 9);
    }

    #[test]
    fn test_first_run_writes_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nexus-builder").join(config::CONFIG_FILENAME);

        assert_eq!(ensure_default_config(&path), path);
        assert!(path.exists());
        assert_eq!(config::load_settings(&path), Settings::default());
    }

    #[test]
    fn test_existing_config_left_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(config::CONFIG_FILENAME);
        std::fs::write(&path, "[defaults]\nmax_user_projects = 2\n").unwrap();

        ensure_default_config(&path);
        assert_eq!(config::load_settings(&path).defaults.max_user_projects, 2);
    }

    #[test]
    fn test_invalid_base_url_is_an_error() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".to_string();
        assert!(build_client(&settings).is_err());
    }
}
