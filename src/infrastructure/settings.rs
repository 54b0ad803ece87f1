// ============================================================
// SERVER SETTINGS
// ============================================================
// Process-level settings layered from defaults, an optional TOML
// file, and CLEANSHEET_-prefixed environment variables

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Upper bound on the multipart request body, in bytes
    pub max_upload_bytes: usize,

    /// Actix worker count; None leaves the actix default
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_upload_bytes: 20 * 1024 * 1024,
            workers: None,
        }
    }
}

impl ServerSettings {
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(ServerSettings::default()))
            .merge(Toml::file("cleansheet.toml"))
            .merge(Env::prefixed("CLEANSHEET_"))
            .extract()
            .map_err(|e| AppError::Internal(format!("Failed to load settings: {}", e)))
    }
}
