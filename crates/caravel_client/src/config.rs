//! Dispatcher configuration loading.

use crate::Endpoint;
use caravel_error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dispatcher configuration: the remote endpoint plus an optional bearer
/// token attached to every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct DispatcherConfig {
    /// Remote endpoint description
    endpoint: Endpoint,
    /// Bearer token attached when no per-call override is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
}

impl DispatcherConfig {
    /// Load configuration from an optional TOML file with `CARAVEL`-prefixed
    /// environment overrides (e.g. `CARAVEL__ENDPOINT__SERVER`).
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the sources cannot be read or the
    /// merged settings do not deserialize.
    #[tracing::instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix("CARAVEL").separator("__"))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load config: {}", e)))?;
        settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the content does not parse.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_core::Platform;

    #[test]
    fn test_config_parses_from_toml() {
        let config = DispatcherConfig::from_toml(
            r#"
            auth_token = "secret"

            [endpoint]
            platform = "desktop"
            server = "https://api.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.auth_token().as_deref(), Some("secret"));
        assert_eq!(*config.endpoint().platform(), Platform::Desktop);
        assert_eq!(
            config.endpoint().base_address().unwrap(),
            "https://api.example.com/api/"
        );
    }

    #[test]
    fn test_config_rejects_malformed_toml() {
        let err = DispatcherConfig::from_toml("endpoint = 5").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
