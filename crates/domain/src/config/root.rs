use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::{LoggingConfig, VALID_LOG_LEVELS};
use super::owner_cache::OwnerCacheConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub owner_cache: OwnerCacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate a TOML document. Missing sections take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner_cache.capacity == 0 {
            return Err(ConfigError::Validation(
                "owner_cache.capacity must be greater than 0".to_string(),
            ));
        }

        if self.owner_cache.max_chain_depth == 0 {
            return Err(ConfigError::Validation(
                "owner_cache.max_chain_depth must be greater than 0".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {:?}",
                self.logging.level, VALID_LOG_LEVELS
            )));
        }

        Ok(())
    }
}
