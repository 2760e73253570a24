//! Tests for session initialization.

use async_trait::async_trait;
use caravel_client::{DeviceIdSource, GeneratedDeviceId, Session};
use caravel_core::Platform;
use caravel_error::SessionResult;
use chrono::NaiveDate;

struct FixedDeviceId(&'static str);

#[async_trait]
impl DeviceIdSource for FixedDeviceId {
    async fn device_id(&self) -> SessionResult<String> {
        Ok(self.0.to_string())
    }
}

#[tokio::test]
async fn test_initialize_reads_the_device_id() {
    let header = Session::initialize(&FixedDeviceId("device-42"), Platform::Web)
        .await
        .unwrap();
    let info = header.decode().unwrap();
    assert_eq!(info.device_id(), "device-42");
    assert_eq!(info.device(), "web");
    // Date part only.
    assert!(info.date().parse::<NaiveDate>().is_ok());
    assert_eq!(info.date().len(), 10);
}

#[tokio::test]
async fn test_generated_device_id_is_a_uuid() {
    let id = GeneratedDeviceId.device_id().await.unwrap();
    assert_eq!(uuid::Uuid::parse_str(&id).unwrap().get_version_num(), 4);
}

#[tokio::test]
async fn test_two_initializations_share_no_state() {
    let first = Session::initialize(&GeneratedDeviceId, Platform::Android)
        .await
        .unwrap();
    let second = Session::initialize(&GeneratedDeviceId, Platform::Android)
        .await
        .unwrap();
    // Fresh uuids mean fresh headers; each header is an immutable value.
    assert_ne!(first.value(), second.value());
}
