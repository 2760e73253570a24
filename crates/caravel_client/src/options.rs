//! Per-call dispatch overrides.

use derive_getters::Getters;

/// Per-call overrides for [`crate::QueryDispatcher::dispatch`].
///
/// The default options override nothing: no storage namespace, no bearer
/// token, storage preferred when configured, no extra headers.
#[derive(Debug, Clone, Default, PartialEq, Getters, derive_builder::Builder)]
#[builder(pattern = "owned", default)]
pub struct DispatchOptions {
    /// Storage namespace passed to the provider
    #[builder(setter(strip_option, into))]
    db: Option<String>,
    /// Bearer token override for this call
    #[builder(setter(strip_option, into))]
    auth: Option<String>,
    /// Force remote dispatch even when a storage provider is configured
    online: bool,
    /// Extra headers appended in caller order
    #[builder(setter(into))]
    headers: Vec<(String, String)>,
}

impl DispatchOptions {
    /// Creates a builder for `DispatchOptions`.
    pub fn builder() -> DispatchOptionsBuilder {
        DispatchOptionsBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_override_nothing() {
        let options = DispatchOptions::default();
        assert_eq!(options.db(), &None);
        assert_eq!(options.auth(), &None);
        assert!(!*options.online());
        assert!(options.headers().is_empty());
    }

    #[test]
    fn test_builder_sets_overrides() {
        let options = DispatchOptions::builder()
            .db("tenant-7")
            .auth("token")
            .online(true)
            .headers(vec![("X-Trace".to_string(), "abc".to_string())])
            .build()
            .unwrap();
        assert_eq!(options.db().as_deref(), Some("tenant-7"));
        assert_eq!(options.auth().as_deref(), Some("token"));
        assert!(*options.online());
        assert_eq!(options.headers().len(), 1);
    }
}
