//! Configuration loader for Chatline.
//!
//! Reads `config.toml` from the data directory (`~/.chatline/` by default) and
//! deserializes it into [`AppConfig`]. Falls back to defaults when the file is
//! missing or malformed, then applies environment overrides.

use std::path::{Path, PathBuf};

use chatline_types::config::AppConfig;
use chatline_types::error::ConfigError;

/// Overrides `inference.base_url`.
pub const ENV_OLLAMA_URL: &str = "CHATLINE_OLLAMA_URL";
/// Overrides `inference.model`.
pub const ENV_MODEL: &str = "CHATLINE_MODEL";
/// Overrides the data directory.
pub const ENV_DATA_DIR: &str = "CHATLINE_DATA_DIR";

/// Resolve the data directory.
///
/// Priority: `CHATLINE_DATA_DIR`, then `~/.chatline`, then `./.chatline`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".chatline");
    }

    PathBuf::from(".chatline")
}

/// Read and parse `{data_dir}/config.toml`.
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn read_config(data_dir: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::Read {
                path: config_path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    toml::from_str::<AppConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: config_path.display().to_string(),
            message: err.to_string(),
        })
}

/// Load configuration with defaults and environment overrides applied.
///
/// - If the file does not exist, starts from [`AppConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and starts
///   from the default.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let mut config = match read_config(data_dir).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!(
                "No config.toml found in {}, using defaults",
                data_dir.display()
            );
            AppConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            AppConfig::default()
        }
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok());
    config
}

/// Apply `CHATLINE_*` overrides using `lookup` to read variables.
pub fn apply_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(ENV_OLLAMA_URL).filter(|v| !v.is_empty()) {
        config.inference.base_url = url;
    }
    if let Some(model) = lookup(ENV_MODEL).filter(|v| !v.is_empty()) {
        config.inference.model = model;
    }
}

/// Absolute path of the SQLite database file.
pub fn database_path(data_dir: &Path, config: &AppConfig) -> PathBuf {
    data_dir.join(&config.database.file)
}
