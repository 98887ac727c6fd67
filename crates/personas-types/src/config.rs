//! Service configuration types.
//!
//! `ServiceConfig` represents the optional `config.toml` in the data
//! directory. Every field has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the personas service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite file name, relative to the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Full sqlx database URL. Takes precedence over `database_file`.
    #[serde(default)]
    pub database_url: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_file() -> String {
    "personas.db".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_file: default_database_file(),
            database_url: None,
        }
    }
}

impl ServiceConfig {
    /// `host:port` string for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
