use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::hosts::HostsConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Main configuration structure for hostd
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Static name table
    #[serde(default)]
    pub hosts: HostsConfig,

    /// Answer settings
    #[serde(default)]
    pub dns: DnsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. hostd.toml in current directory
    /// 3. Default configuration
    ///
    /// Command-line overrides are applied last.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("hostd.toml").exists() {
            Self::from_file("hostd.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.hosts_path {
            self.hosts.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.hosts.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Hosts file path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub hosts_path: Option<String>,
    pub log_level: Option<String>,
}
