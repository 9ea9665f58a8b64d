//! User service configuration.

use std::env;

use common::{AppResult, ServiceConfig, StorageConfig};
use domain::validate_store_key;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Service name and log level
    pub service: ServiceConfig,
    /// Where the repository keeps its record
    pub storage: StorageConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                log_level: env::var("USER_SERVICE_LOG_LEVEL")
                    .or_else(|_| env::var("RUST_LOG"))
                    .unwrap_or(defaults.service.log_level),
            },
            storage: StorageConfig {
                key: env::var("USER_SERVICE_STORAGE_KEY").unwrap_or(defaults.storage.key),
            },
        }
    }

    /// Check the loaded values before wiring anything.
    pub fn validate(&self) -> AppResult<()> {
        validate_store_key(&self.storage.key)?;
        Ok(())
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                ..ServiceConfig::default()
            },
            storage: StorageConfig::default(),
        }
    }
}
