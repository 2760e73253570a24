//! HTTP transport seam and the default reqwest-backed implementation.

use async_trait::async_trait;
use caravel_core::Verb;
use caravel_error::{TransportError, TransportErrorKind, TransportResult};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, error};

/// Generic HTTP transport.
///
/// Implementations execute one request and return the decoded response
/// body. Transport failures are surfaced to the dispatcher's caller
/// unmodified; no retries happen at this layer.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one request.
    ///
    /// # Errors
    ///
    /// Returns a network error when no response arrives, a status error for
    /// non-2xx responses, and a decode error when the body is not JSON.
    async fn send(
        &self,
        verb: &Verb,
        url: &str,
        body: Option<&Value>,
        headers: &[(String, String)],
    ) -> TransportResult<Value>;
}

/// Default transport over a shared reqwest client.
///
/// DELETE requests carry their JSON payload as a request body, so this
/// transport satisfies the dispatcher's DELETE encoding without a
/// query-string fallback.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

fn method_for(verb: &Verb) -> TransportResult<Method> {
    match verb {
        Verb::Get => Ok(Method::GET),
        Verb::Post => Ok(Method::POST),
        Verb::Put => Ok(Method::PUT),
        Verb::Delete => Ok(Method::DELETE),
        Verb::Other(name) => Method::from_bytes(name.as_bytes()).map_err(|e| {
            TransportError::new(TransportErrorKind::Network(format!(
                "Invalid method {name}: {e}"
            )))
        }),
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        verb: &Verb,
        url: &str,
        body: Option<&Value>,
        headers: &[(String, String)],
    ) -> TransportResult<Value> {
        let method = method_for(verb)?;
        let mut request = self.client.request(method, url);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }

        debug!(verb = %verb, url, has_body = body.is_some(), "Sending request");

        let response = request.send().await.map_err(|e| {
            error!(verb = %verb, url, error = ?e, "HTTP request failed");
            TransportError::new(TransportErrorKind::Network(format!("Request failed: {}", e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(verb = %verb, url, status = %status, error = %error_text, "Server error");
            return Err(TransportError::new(TransportErrorKind::Status {
                status: status.as_u16(),
                body: error_text,
            }));
        }

        let text = response.text().await.map_err(|e| {
            TransportError::new(TransportErrorKind::Decode(format!(
                "Failed to read body: {}",
                e
            )))
        })?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            error!(url, error = ?e, "Failed to parse response");
            TransportError::new(TransportErrorKind::Decode(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })
    }
}
