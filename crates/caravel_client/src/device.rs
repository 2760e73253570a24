//! Device identity and one-time session initialization.

use async_trait::async_trait;
use caravel_core::{Platform, SessionHeader};
use caravel_error::SessionResult;
use chrono::Utc;
use tracing::debug;

/// Source of the stable device identifier carried in the session header.
///
/// Hosts typically read a persisted id from their own storage; the shipped
/// [`GeneratedDeviceId`] mints a fresh uuid for hosts without one.
#[async_trait]
pub trait DeviceIdSource: Send + Sync {
    /// Read the device id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id cannot be read.
    async fn device_id(&self) -> SessionResult<String>;
}

/// Device id source that mints a random uuid.
#[derive(Debug, Clone, Default)]
pub struct GeneratedDeviceId;

#[async_trait]
impl DeviceIdSource for GeneratedDeviceId {
    async fn device_id(&self) -> SessionResult<String> {
        Ok(uuid::Uuid::new_v4().to_string())
    }
}

/// One-time session setup.
///
/// Initialization must complete before a dispatcher is constructed; the
/// resulting header is an immutable value reused for every call.
pub struct Session;

impl Session {
    /// Read the device id and issue the session header for today's date.
    ///
    /// # Errors
    ///
    /// Returns an error if the device id cannot be read or the header
    /// cannot be encoded.
    pub async fn initialize(
        source: &dyn DeviceIdSource,
        platform: Platform,
    ) -> SessionResult<SessionHeader> {
        let device_id = source.device_id().await?;
        debug!(platform = %platform, "Issuing session header");
        SessionHeader::issue(device_id, platform, Utc::now().date_naive())
    }
}
