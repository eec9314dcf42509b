#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_database_url, validate_non_empty_string, validate_path, validate_port, Validate,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub use toml_config::AppConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub index_path: String,
    pub error_status: ErrorStatusPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            index_path: "./index.html".to_string(),
            error_status: ErrorStatusPolicy::Legacy,
        }
    }
}

/// How CRUD failures are reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStatusPolicy {
    /// Always HTTP 200; callers look for the `Error` key.
    #[default]
    Legacy,
    /// 400 for rejected documents, 502 when the store cannot answer.
    Http,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl Default for StoreBackend {
    fn default() -> Self {
        if cfg!(feature = "mongo") {
            StoreBackend::Mongo
        } else {
            StoreBackend::Memory
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub url: String,
    pub collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: "mongodb://mongo/people".to_string(),
            collection: "personmodels".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbesConfig {
    pub file_path: String,
    pub file_contents: String,
    pub read_dir: String,
    pub interface: String,
}

impl Default for ProbesConfig {
    fn default() -> Self {
        Self {
            file_path: "/data/probe.txt".to_string(),
            file_contents: "Hello from the container!".to_string(),
            read_dir: "/data".to_string(),
            interface: "eth0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub verbose: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().map_err(|e| {
            crate::utils::error::ServiceError::InvalidConfigValueError {
                field: "server.host".to_string(),
                value: self.host.clone(),
                reason: format!("Invalid listen address: {}", e),
            }
        })
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_port("server.port", self.server.port)?;
        self.server.socket_addr()?;
        validate_path("server.index_path", &self.server.index_path)?;

        if self.database.backend == StoreBackend::Mongo {
            validate_database_url("database.url", &self.database.url)?;
            validate_non_empty_string("database.collection", &self.database.collection)?;
        }

        validate_path("probes.file_path", &self.probes.file_path)?;
        validate_path("probes.read_dir", &self.probes.read_dir)?;
        validate_non_empty_string("probes.interface", &self.probes.interface)?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
