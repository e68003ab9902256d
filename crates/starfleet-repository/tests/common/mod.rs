//! Common test infrastructure for database integration tests.

use starfleet_config::DatabaseConfig;
use starfleet_core::{init_telemetry, TelemetryConfig};
use starfleet_repository::DatabasePool;
use std::sync::{Arc, Once};
use tempfile::TempDir;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");
const DATA: &str = include_str!("../fixtures/data.sql");

/// Number of officers seeded by `fixtures/data.sql`.
pub const SEEDED_OFFICERS: u64 = 5;

static TRACING: Once = Once::new();

/// Test database wrapper.
///
/// Owns a temporary SQLite file with the officers schema and five seeded
/// captains. The file is removed when the wrapper is dropped.
pub struct TestDatabase {
    _dir: TempDir,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh database file, applies the schema and seeds it.
    pub async fn new() -> Self {
        TRACING.call_once(|| {
            let config = TelemetryConfig {
                filter: "warn,starfleet_repository=debug".to_string(),
                ..TelemetryConfig::default()
            };
            // A unit test in this process may have installed a subscriber first.
            let _ = init_telemetry(&config);
        });

        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("starfleet_test.db").display()),
            min_connections: 1,
            max_connections: 4,
            connect_timeout_secs: 5,
            idle_timeout_secs: 600,
            log_queries: true,
        };

        let pool = DatabasePool::new(&config)
            .await
            .expect("Failed to open test database");

        sqlx::raw_sql(SCHEMA)
            .execute(pool.inner())
            .await
            .expect("Failed to apply schema");
        sqlx::raw_sql(DATA)
            .execute(pool.inner())
            .await
            .expect("Failed to seed officers");

        Self {
            _dir: dir,
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }
}
