//! Database connection pool management

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use vendora_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create the MySQL connection pool
///
/// Expects the `users`, `otps` and `businesses` tables described in the
/// repository implementations.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    tracing::info!(
        event = "database_pool_creating",
        max_connections = config.max_connections
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(600))
        .test_before_acquire(true)
        .connect(&config.url)
        .await
        .map_err(|e| {
            tracing::error!(event = "database_pool_failed", error = %e);
            InfrastructureError::Database(e)
        })?;

    tracing::info!(event = "database_pool_created");

    Ok(pool)
}
