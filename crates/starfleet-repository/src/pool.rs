//! Database connection pool management.

use crate::UnitOfWork;
use async_trait::async_trait;
use shaku::Component;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use starfleet_config::DatabaseConfig;
use starfleet_core::{HealthCheck, HealthStatus, Interface, StarfleetError, StarfleetResult};
use std::str::FromStr;
use tracing::{info, warn};

/// Interface for database pool operations.
///
/// This trait abstracts database pool functionality for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying SQLite pool.
    fn inner(&self) -> &SqlitePool;

    /// Opens a new unit of work on a pooled connection.
    async fn begin(&self) -> StarfleetResult<UnitOfWork>;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> StarfleetResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// Alias: [`connect`](Self::connect)
    pub async fn new(config: &DatabaseConfig) -> StarfleetResult<Self> {
        info!("Connecting to SQLite database at {}", config.url);

        if !config.url.starts_with("sqlite:") {
            return Err(StarfleetError::Configuration(format!(
                "Unsupported database URL (expected sqlite:): {}",
                config.url
            )));
        }

        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| StarfleetError::Configuration(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        let pool = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                StarfleetError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("SQLite connection pool established");
        Ok(Self { pool })
    }

    /// Creates a new database pool from configuration.
    ///
    /// This is an alias for [`new`](Self::new).
    pub async fn connect(config: &DatabaseConfig) -> StarfleetResult<Self> {
        Self::new(config).await
    }

    /// Creates a `DatabasePool` around a pre-existing pool (for Shaku injection).
    #[must_use]
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    /// Opens a new unit of work on a pooled connection.
    pub async fn begin(&self) -> StarfleetResult<UnitOfWork> {
        UnitOfWork::begin(&self.pool).await
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> StarfleetResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StarfleetError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &SqlitePool {
        DatabasePool::inner(self)
    }

    async fn begin(&self) -> StarfleetResult<UnitOfWork> {
        DatabasePool::begin(self).await
    }

    async fn health_check(&self) -> StarfleetResult<()> {
        DatabasePool::health_check(self).await
    }

    async fn close(&self) {
        DatabasePool::close(self).await;
    }
}

#[async_trait]
impl HealthCheck for DatabasePool {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> HealthStatus {
        match DatabasePool::health_check(self).await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}

impl std::ops::Deref for DatabasePool {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> StarfleetResult<std::sync::Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(std::sync::Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_pool_is_healthy() {
        let pool = DatabasePool::new(&DatabaseConfig::in_memory()).await.unwrap();
        pool.health_check().await.unwrap();

        let status = HealthCheck::check(&pool).await;
        assert!(status.is_healthy());
        assert_eq!(HealthCheck::name(&pool), "database");
    }

    #[tokio::test]
    async fn test_closed_pool_is_unhealthy() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        pool.close().await;

        let status = HealthCheck::check(&*pool).await;
        assert!(status.is_unhealthy());
    }

    #[tokio::test]
    async fn test_invalid_url_is_configuration_error() {
        let config = DatabaseConfig {
            url: "postgres://localhost/fleet".to_string(),
            ..DatabaseConfig::default()
        };
        let err = DatabasePool::new(&config).await.unwrap_err();
        assert!(matches!(err, StarfleetError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_interface_opens_unit_of_work() {
        let pool: Box<dyn DatabasePoolInterface> =
            Box::new(DatabasePool::new(&DatabaseConfig::in_memory()).await.unwrap());

        let uow = pool.begin().await.unwrap();
        uow.commit().await.unwrap();
        pool.health_check().await.unwrap();
    }
}
