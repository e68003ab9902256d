//! Application configuration structures.

use serde::{Deserialize, Serialize};
use starfleet_core::TelemetryConfig;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Tracing configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, test, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "starfleet-persistence".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite URL, e.g. `sqlite://starfleet.db` or `sqlite::memory:`.
    pub url: String,
    /// Minimum connection pool size.
    pub min_connections: u32,
    /// Maximum connection pool size.
    pub max_connections: u32,
    /// Connection acquire timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds.
    pub idle_timeout_secs: u64,
    /// Enable SQL statement logging.
    pub log_queries: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://starfleet.db".to_string(),
            min_connections: 1,
            max_connections: 5,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
            log_queries: false,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a private in-memory database.
    ///
    /// Pinned to a single connection so every statement runs on the same
    /// connection.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            min_connections: 1,
            max_connections: 1,
            ..Self::default()
        }
    }

    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the idle timeout as a Duration.
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "starfleet-persistence");
        assert_eq!(config.app.environment, "development");
        assert_eq!(config.database.url, "sqlite://starfleet.db");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_database_timeouts() {
        let config = DatabaseConfig::default();
        assert_eq!(config.connect_timeout(), Duration::from_secs(30));
        assert_eq!(config.idle_timeout(), Duration::from_secs(600));
    }

    #[test]
    fn test_in_memory_is_single_connection() {
        let config = DatabaseConfig::in_memory();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.connect_timeout_secs, 30);
    }

    #[test]
    fn test_partial_database_section() {
        let config: DatabaseConfig = serde_json::from_str(r#"{"url": "sqlite://fleet.db"}"#).unwrap();
        assert_eq!(config.url, "sqlite://fleet.db");
        assert_eq!(config.min_connections, 1);
        assert!(!config.log_queries);
    }
}
