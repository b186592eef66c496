//! Database connection configuration

use serde::{Deserialize, Serialize};

/// Database connection and pool configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of pooled connections
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/vendora_dev"),
            max_connections: 10,
            connect_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create a configuration for the given connection URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of pooled connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Load configuration from `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
            connect_timeout_secs: defaults.connect_timeout_secs,
        }
    }
}
