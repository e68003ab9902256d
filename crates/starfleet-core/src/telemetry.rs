//! Tracing bootstrap.
//!
//! Library code only emits `tracing` events; binaries and test harnesses call
//! [`init_telemetry`] once to install a subscriber.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::StarfleetResult;
use serde::{Deserialize, Serialize};

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event.
    pub service_name: String,

    /// Whether to write events to stdout at all.
    pub console_output: bool,

    /// Emit JSON lines instead of human-readable output.
    pub json_output: bool,

    /// Fallback filter directive when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "starfleet-persistence".to_string(),
            console_output: true,
            json_output: false,
            filter: "info,starfleet=debug,sqlx=warn".to_string(),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Fails if a global subscriber is already set.
#[cfg(feature = "telemetry")]
pub fn init_telemetry(config: &TelemetryConfig) -> StarfleetResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if !config.console_output {
        registry.try_init()
    } else if config.json_output {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|e| {
        crate::StarfleetError::Configuration(format!("Failed to initialize tracing: {e}"))
    })?;

    tracing::info!(
        service_name = %config.service_name,
        json_output = config.json_output,
        "Telemetry initialized"
    );

    Ok(())
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(_config: &TelemetryConfig) -> StarfleetResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "starfleet-persistence");
        assert!(config.console_output);
        assert!(!config.json_output);
        assert!(config.filter.contains("starfleet=debug"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TelemetryConfig = serde_json::from_str(r#"{"json_output": true}"#).unwrap();
        assert!(config.json_output);
        assert_eq!(config.service_name, "starfleet-persistence");
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn test_init_is_noop_without_feature() {
        assert!(init_telemetry(&TelemetryConfig::default()).is_ok());
    }
}
