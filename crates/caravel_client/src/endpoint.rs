//! Remote endpoint description and base-address resolution.

use caravel_core::Platform;
use caravel_error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use url::Url;

/// Where remote requests go.
///
/// Web-production hosts derive their base address from the page origin plus
/// a base path; every other target uses the configured server URL. The
/// resolved address is always suffixed `/api/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), pattern = "owned")]
pub struct Endpoint {
    /// Host platform
    platform: Platform,
    /// Production deployment flag
    #[serde(default)]
    #[builder(default)]
    production: bool,
    /// Configured server URL for non-web-production targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    server: Option<String>,
    /// Current page origin, supplied by the host on web targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    origin: Option<String>,
    /// Path prefix under the origin, e.g. `/app`
    #[serde(default)]
    #[builder(default)]
    base_path: String,
}

impl Endpoint {
    /// Creates a builder for `Endpoint`.
    pub fn builder() -> EndpointBuilder {
        EndpointBuilder::default()
    }

    /// Resolve the base address requests are issued against.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the required origin or server URL
    /// is missing, or when the resolved address is not a valid URL.
    pub fn base_address(&self) -> Result<String, ConfigError> {
        let root = if self.platform == Platform::Web && self.production {
            let origin = self
                .origin
                .as_deref()
                .ok_or_else(|| ConfigError::new("web production target requires an origin"))?;
            format!("{}{}", origin.trim_end_matches('/'), self.base_path)
        } else {
            self.server
                .clone()
                .ok_or_else(|| ConfigError::new("no server url configured"))?
        };
        let base = format!("{}/api/", root.trim_end_matches('/'));
        Url::parse(&base)
            .map_err(|e| ConfigError::new(format!("invalid base address {base}: {e}")))?;
        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_production_resolves_from_origin() {
        let endpoint = Endpoint::builder()
            .platform(Platform::Web)
            .production(true)
            .origin("https://app.example.com/")
            .base_path("/portal")
            .build()
            .unwrap();
        assert_eq!(
            endpoint.base_address().unwrap(),
            "https://app.example.com/portal/api/"
        );
    }

    #[test]
    fn test_non_production_web_uses_the_server_url() {
        let endpoint = Endpoint::builder()
            .platform(Platform::Web)
            .server("http://localhost:3000")
            .build()
            .unwrap();
        assert_eq!(endpoint.base_address().unwrap(), "http://localhost:3000/api/");
    }

    #[test]
    fn test_desktop_uses_the_server_url() {
        let endpoint = Endpoint::builder()
            .platform(Platform::Desktop)
            .production(true)
            .server("https://api.example.com/")
            .build()
            .unwrap();
        assert_eq!(endpoint.base_address().unwrap(), "https://api.example.com/api/");
    }

    #[test]
    fn test_missing_server_is_a_configuration_error() {
        let endpoint = Endpoint::builder()
            .platform(Platform::Desktop)
            .build()
            .unwrap();
        let err = endpoint.base_address().unwrap_err();
        assert!(err.message.contains("no server url"));
    }

    #[test]
    fn test_missing_origin_is_a_configuration_error() {
        let endpoint = Endpoint::builder()
            .platform(Platform::Web)
            .production(true)
            .build()
            .unwrap();
        let err = endpoint.base_address().unwrap_err();
        assert!(err.message.contains("origin"));
    }
}
