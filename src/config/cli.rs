use crate::config::{AppConfig, StoreBackend};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "person-directory")]
#[command(about = "A small HTTP service over a person document collection")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen host, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Document store connection string, overrides database.url
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Store backend, overrides database.backend
    #[arg(long, value_enum)]
    pub backend: Option<StoreBackend>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Loads the config file (or defaults) and applies command line overrides.
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
        if let Some(backend) = self.backend {
            config.database.backend = backend;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let args = CliArgs::try_parse_from([
            "person-directory",
            "--port",
            "8081",
            "--backend",
            "memory",
            "--database-url",
            "mongodb://other/people",
            "-v",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.database.url, "mongodb://other/people");
        assert!(config.logging.verbose);
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
