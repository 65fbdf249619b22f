//! Global configuration types for Chatline.
//!
//! `AppConfig` represents the top-level `config.toml` that controls the HTTP
//! listener, the inference backend, and the database file. Every field has a
//! default so an empty or absent file is valid.

use serde::{Deserialize, Serialize};

/// Persona line that opens every prompt unless overridden.
pub const DEFAULT_PERSONA: &str =
    "You are a helpful and intelligent AI assistant. Answer clearly and concisely.";

/// Top-level configuration, loaded from `~/.chatline/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub inference: InferenceConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Inference backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the Ollama-compatible backend (no trailing `/api/generate`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model name sent with every generate request.
    #[serde(default = "default_model")]
    pub model: String,
    /// First line of every prompt.
    #[serde(default = "default_persona")]
    pub persona: String,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3".to_string()
}

fn default_persona() -> String {
    DEFAULT_PERSONA.to_string()
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            persona: default_persona(),
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file name, resolved relative to the data directory.
    #[serde(default = "default_db_file")]
    pub file: String,
}

fn default_db_file() -> String {
    "chatline.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            file: default_db_file(),
        }
    }
}
