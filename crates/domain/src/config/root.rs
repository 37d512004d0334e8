use serde::{Deserialize, Serialize};
use std::path::Path;

use super::api::ApiConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::propagation::PropagationConfig;

const LOCAL_CONFIG_PATH: &str = "sakura-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/sakura-dns/config.toml";

/// Main configuration structure for sakura-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Hosting API endpoint and credentials
    #[serde(default)]
    pub api: ApiConfig,

    /// Propagation check timing
    #[serde(default)]
    pub propagation: PropagationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. sakura-dns.toml in current directory
    /// 3. /etc/sakura-dns/config.toml
    /// 4. Default configuration
    ///
    /// API credentials missing from the file are taken from the environment.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.api.apply_env_with(|key| std::env::var(key).ok());
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(port) = overrides.dns_port {
            self.propagation.dns_port = port;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.propagation.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "propagation.poll_interval_ms cannot be 0".to_string(),
            ));
        }
        if self.propagation.transport_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "propagation.transport_timeout_ms cannot be 0".to_string(),
            ));
        }
        if self.propagation.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.api.zone.is_empty() {
            return Err(ConfigError::Validation("api.zone cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Credentials required by every hosting API call.
    pub fn credentials(&self) -> Result<(&str, &str), ConfigError> {
        let token = self
            .api
            .access_token
            .as_deref()
            .ok_or(ConfigError::MissingCredential(super::api::ENV_ACCESS_TOKEN))?;
        let secret = self
            .api
            .access_token_secret
            .as_deref()
            .ok_or(ConfigError::MissingCredential(super::api::ENV_ACCESS_TOKEN_SECRET))?;
        Ok((token, secret))
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<&'static str> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub dns_port: Option<u16>,
}
