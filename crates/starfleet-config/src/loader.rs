//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use starfleet_core::{StarfleetError, StarfleetResult};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{config_dir}/default.toml` - Default values
    /// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{config_dir}/local.toml` - Uncommitted local overrides
    /// 4. Environment variables with `STARFLEET_` prefix
    pub fn new(config_dir: impl Into<String>) -> StarfleetResult<Self> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> StarfleetResult<Self> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> StarfleetResult<()> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Gets a specific configuration value by dotted key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }

    fn load_config(config_dir: &str) -> StarfleetResult<AppConfig> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("STARFLEET_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("STARFLEET")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_starfleet_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Rejects configurations that cannot open a pool.
pub fn validate_config(config: &AppConfig) -> StarfleetResult<()> {
    let database = &config.database;

    if database.url.is_empty() {
        return Err(StarfleetError::Configuration("Database URL is required".to_string()));
    }

    if !database.url.starts_with("sqlite:") {
        return Err(StarfleetError::Configuration(format!(
            "Unsupported database URL (expected sqlite:): {}",
            database.url
        )));
    }

    if database.max_connections == 0 {
        return Err(StarfleetError::Configuration(
            "max_connections must be at least 1".to_string(),
        ));
    }

    if database.min_connections > database.max_connections {
        return Err(StarfleetError::Configuration(format!(
            "min_connections ({}) exceeds max_connections ({})",
            database.min_connections, database.max_connections
        )));
    }

    Ok(())
}

fn config_error_to_starfleet_error(err: ConfigError) -> StarfleetError {
    StarfleetError::Configuration(err.to_string())
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}
