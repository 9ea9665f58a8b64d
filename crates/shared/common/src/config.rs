//! Shared configuration structures.

use domain::USER_STORE_KEY;

/// Base service configuration shared by all services.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// In-memory storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Key the repository writes its record under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: USER_STORE_KEY.to_string(),
        }
    }
}
