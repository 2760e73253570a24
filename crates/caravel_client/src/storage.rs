//! Local storage provider seam.

use async_trait::async_trait;
use caravel_core::Verb;
use caravel_error::StorageResult;
use serde_json::{Map, Value};

/// An injected abstraction that can serve queries without network access,
/// e.g. an embedded local database.
///
/// When a provider is configured and the caller does not force remote
/// dispatch, the dispatcher hands it the verb and the remapped wire batch
/// unchanged. Providers cannot serve remote-procedure calls.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Serve a table-query batch locally.
    ///
    /// `db` is the per-call storage namespace override; providers pick
    /// their own default database when it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot serve the batch.
    async fn request(
        &self,
        verb: &Verb,
        body: &[Map<String, Value>],
        db: Option<&str>,
    ) -> StorageResult<Value>;
}
