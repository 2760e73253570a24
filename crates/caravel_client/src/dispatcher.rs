//! The query dispatcher.

use crate::{
    Connectivity, DispatchOptions, Endpoint, HttpTransport, ReqwestTransport, SharedConnectivity,
    StorageProvider,
};
use caravel_core::{BatchPlan, QueryDescriptor, SessionHeader, Verb, query_string};
use caravel_error::{CaravelResult, DispatchError, DispatchErrorKind};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Routes declarative query batches to a remote endpoint or a local storage
/// provider.
///
/// Each call classifies its batch, picks a route, encodes the batch for the
/// chosen transport, and returns the raw decoded response. The dispatcher
/// holds no mutable state across calls; the session header is computed once
/// at initialization and injected here.
#[derive(Clone, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct QueryDispatcher {
    /// Remote endpoint description
    endpoint: Endpoint,
    /// Session header attached to every remote call
    session: SessionHeader,
    /// Transport used for remote dispatch
    #[builder(default = "Arc::new(ReqwestTransport::new())")]
    transport: Arc<dyn HttpTransport>,
    /// Connectivity source, read once per call
    #[builder(default = "Arc::new(SharedConnectivity::default())")]
    connectivity: Arc<dyn Connectivity>,
    /// Local storage provider, preferred over the network when present
    #[builder(default, setter(strip_option))]
    storage: Option<Arc<dyn StorageProvider>>,
    /// Bearer token attached when no per-call override is given
    #[builder(default, setter(strip_option, into))]
    auth_token: Option<String>,
}

impl QueryDispatcher {
    /// Creates a builder for `QueryDispatcher`.
    pub fn builder() -> QueryDispatcherBuilder {
        QueryDispatcherBuilder::default()
    }

    /// Dispatch one batch.
    ///
    /// The batch is classified before any connectivity, storage, or network
    /// access; malformed batches fail fast. A configured storage provider is
    /// preferred unless `options.online` forces remote dispatch. Remote
    /// dispatch encodes GET batches as a query string and every other verb
    /// as a JSON body.
    ///
    /// # Errors
    ///
    /// Fails with a dispatch error for malformed batches, offline remote
    /// dispatch, or a remote-procedure call routed to storage; transport and
    /// storage errors are surfaced unmodified.
    #[instrument(skip(self, batch, options), fields(verb = %verb, batch_len = batch.len()))]
    pub async fn dispatch(
        &self,
        verb: Verb,
        batch: &[QueryDescriptor],
        options: &DispatchOptions,
    ) -> CaravelResult<Value> {
        let plan = BatchPlan::classify(batch)?;

        if let Some(storage) = self.storage.as_ref().filter(|_| !*options.online()) {
            return match &plan {
                BatchPlan::Procedure { name, .. } => Err(DispatchError::new(
                    DispatchErrorKind::MethodNotAllowed(name.clone()),
                )
                .into()),
                BatchPlan::Tables(rows) => {
                    debug!(rows = rows.len(), db = ?options.db(), "Serving batch from storage");
                    storage
                        .request(&verb, rows, options.db().as_deref())
                        .await
                        .map_err(Into::into)
                }
            };
        }

        if !self.connectivity.is_online() {
            return Err(DispatchError::new(DispatchErrorKind::Offline).into());
        }

        let base = self.endpoint.base_address()?;
        let envelope = plan.envelope();
        let headers = self.headers(options);
        let mut url = format!("{base}{}", plan.sub_path());
        let body = match verb {
            Verb::Get => {
                let query = query_string::encode(&envelope);
                if !query.is_empty() {
                    url = format!("{url}?{query}");
                }
                None
            }
            _ => Some(envelope),
        };

        debug!(url = %url, "Dispatching remote request");
        let value = self
            .transport
            .send(&verb, &url, body.as_ref(), &headers)
            .await?;
        Ok(value)
    }

    fn headers(&self, options: &DispatchOptions) -> Vec<(String, String)> {
        let mut headers = options.headers().clone();
        let token = options.auth().clone().or_else(|| self.auth_token.clone());
        if let Some(token) = token {
            let already_set = headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("Authorization"));
            if !already_set {
                headers.push(("Authorization".to_string(), format!("Bearer {token}")));
            }
        }
        headers.push((SessionHeader::NAME.to_string(), self.session.value().to_string()));
        headers
    }
}
