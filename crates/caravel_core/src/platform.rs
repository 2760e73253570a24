//! Host platform identifiers.

use serde::{Deserialize, Serialize};

/// Platform the host application runs on.
///
/// The platform string participates in the session header and in base
/// address resolution (web-production hosts derive their base address from
/// the page origin).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    /// Browser host
    Web,
    /// Desktop host
    Desktop,
    /// Android host
    Android,
    /// iOS host
    Ios,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_string_round_trip() {
        assert_eq!(Platform::Web.to_string(), "web");
        assert_eq!("desktop".parse::<Platform>().ok(), Some(Platform::Desktop));
        assert_eq!("IOS".parse::<Platform>().ok(), Some(Platform::Ios));
    }
}
