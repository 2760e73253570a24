//! Session header value.
//!
//! The header is computed once at initialization and reused for every call:
//! base64 of JSON `{"deviceId": ..., "device": ..., "date": ...}` with a
//! date-only `date`. It is an immutable value passed into the dispatcher at
//! construction, never hidden shared state.

use crate::Platform;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use caravel_error::{SessionError, SessionErrorKind, SessionResult};
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The JSON blob carried in the session header.
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SessionInfo {
    /// Stable identifier of the installing device
    #[serde(rename = "deviceId")]
    device_id: String,
    /// Platform string of the host
    device: String,
    /// ISO date, date part only (`YYYY-MM-DD`)
    date: String,
}

/// Precomputed `Session` header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHeader {
    encoded: String,
}

impl SessionHeader {
    /// Wire name of the header.
    pub const NAME: &'static str = "Session";

    /// Encode a session header for a device on a platform at a given date.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the blob cannot be serialized.
    pub fn issue(
        device_id: impl Into<String>,
        platform: Platform,
        date: NaiveDate,
    ) -> SessionResult<Self> {
        let info = SessionInfo {
            device_id: device_id.into(),
            device: platform.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
        };
        let json = serde_json::to_string(&info)
            .map_err(|e| SessionError::new(SessionErrorKind::Encoding(e.to_string())))?;
        Ok(Self {
            encoded: STANDARD.encode(json),
        })
    }

    /// The base64 header value.
    pub fn value(&self) -> &str {
        &self.encoded
    }

    /// Decode the header back into its JSON blob.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the value is not base64-encoded JSON of
    /// the expected shape.
    pub fn decode(&self) -> SessionResult<SessionInfo> {
        let bytes = STANDARD
            .decode(&self.encoded)
            .map_err(|e| SessionError::new(SessionErrorKind::Encoding(e.to_string())))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| SessionError::new(SessionErrorKind::Encoding(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_header_is_base64_of_the_expected_blob() {
        let header = SessionHeader::issue("device-1", Platform::Web, date()).unwrap();
        let bytes = STANDARD.decode(header.value()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"deviceId":"device-1","device":"web","date":"2024-03-09"}"#
        );
    }

    #[test]
    fn test_header_decodes_back_to_its_fields() {
        let header = SessionHeader::issue("device-1", Platform::Android, date()).unwrap();
        let info = header.decode().unwrap();
        assert_eq!(info.device_id(), "device-1");
        assert_eq!(info.device(), "android");
        assert_eq!(info.date(), "2024-03-09");
    }
}
