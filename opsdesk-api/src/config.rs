use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: Option<ServerConfig>,
    pub cors: Option<CorsConfig>,
    pub content_server: Option<ContentServerConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: Some(ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            }),
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            content_server: Some(ContentServerConfig::default()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Remote content server holding workspace blobs and settings files,
/// plus the local directory used when it is unreachable
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ContentServerConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub data_dir: String,
}

impl Default for ContentServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888".to_string(),
            username: "opsdesk".to_string(),
            password: "opsdesk-sync".to_string(),
            data_dir: "./server_data".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            let default_config = toml::to_string_pretty(&ApiConfig::default()).map_err(|e| {
                ConfigError::Message(format!("Failed to serialize default config: {e}"))
            })?;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let config: ApiConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("opsdesk").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
