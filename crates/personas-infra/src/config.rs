//! Configuration loader for the personas service.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`ServiceConfig`]. Falls back to defaults when the file is missing or
//! malformed, then applies environment overrides.

use std::path::{Path, PathBuf};

use personas_types::config::ServiceConfig;

use crate::sqlite::pool::database_url_for;

/// Resolve the data directory.
///
/// Uses `PERSONAS_DATA_DIR` if set, otherwise `~/.personas`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PERSONAS_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".personas");
    }

    // Last resort: current directory
    PathBuf::from(".personas")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
pub async fn load_service_config(data_dir: &Path) -> ServiceConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServiceConfig::default()
        }
    }
}

/// Apply `PORT` and `PERSONAS_DATABASE_URL` overrides.
///
/// `lookup` is normally `|key| std::env::var(key).ok()`. An unparseable `PORT`
/// is ignored with a warning.
pub fn apply_env_overrides(
    mut config: ServiceConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ServiceConfig {
    if let Some(port) = lookup("PORT") {
        match port.parse::<u16>() {
            Ok(port) => config.port = port,
            Err(err) => tracing::warn!("Ignoring PORT={port}: {err}"),
        }
    }
    if let Some(url) = lookup("PERSONAS_DATABASE_URL") {
        config.database_url = Some(url);
    }
    config
}

/// The sqlx URL the service should open: `database_url` if configured,
/// otherwise `database_file` inside the data directory.
pub fn resolve_database_url(config: &ServiceConfig, data_dir: &Path) -> String {
    match &config.database_url {
        Some(url) => url.clone(),
        None => database_url_for(&data_dir.join(&config.database_file)),
    }
}
