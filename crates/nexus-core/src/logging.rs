//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Directory name used under the platform data dir
pub const APP_DIR_NAME: &str = "nexus-builder";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/nexus-builder/logs/` because stdout
/// belongs to the terminal UI.
/// Log level is controlled by the `NEXUS_LOG` environment variable.
///
/// # Examples
/// ```bash
/// NEXUS_LOG=debug nexus
/// NEXUS_LOG=nexus_genai=trace nexus
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "nexus.log");

    let env_filter =
        EnvFilter::try_from_env("NEXUS_LOG").unwrap_or_else(|_| EnvFilter::new("nexus=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Nexus Builder starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    Ok(data_directory().join("logs"))
}

/// Base directory for application data (logs, stored projects)
pub fn data_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_app_dir() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("nexus-builder/logs"));
        assert!(dir.starts_with(data_directory()));
    }
}
