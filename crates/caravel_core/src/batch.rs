//! Batch classification into a routable plan.

use crate::QueryDescriptor;
use caravel_error::{DispatchError, DispatchErrorKind, DispatchResult};
use serde_json::{Map, Value};

/// Transport sub-path used when no remote procedure is named.
pub const DEFAULT_SUB_PATH: &str = "http";

/// Wire key wrapping the batch in request bodies and query strings.
pub const ENVELOPE_KEY: &str = "body";

/// A classified batch: either one remote-procedure call or a list of
/// remapped table queries.
///
/// Classification happens before any connectivity, storage, or network
/// access, so malformed batches never reach a collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchPlan {
    /// A single named server-side procedure and its payload.
    Procedure {
        /// Procedure name; replaces the default sub-path on the wire
        name: String,
        /// The entry's `select` payload wrapped in a one-element list
        payload: Vec<Value>,
    },
    /// Table queries remapped to wire spelling.
    Tables(Vec<Map<String, Value>>),
}

impl BatchPlan {
    /// Classify a batch of descriptors.
    ///
    /// # Errors
    ///
    /// Returns `EmptyBatch` for an empty slice, and `UnsupportedBatch` when a
    /// `method` entry is combined with other entries or more than one
    /// `method` entry is present.
    pub fn classify(batch: &[QueryDescriptor]) -> DispatchResult<Self> {
        if batch.is_empty() {
            return Err(DispatchError::new(DispatchErrorKind::EmptyBatch));
        }
        let methods = batch
            .iter()
            .filter(|descriptor| descriptor.method().is_some())
            .count();
        match (methods, batch) {
            (0, _) => {
                let mut rows = Vec::with_capacity(batch.len());
                for descriptor in batch {
                    rows.push(descriptor.to_wire()?);
                }
                Ok(BatchPlan::Tables(rows))
            }
            (1, [entry]) => {
                let name = entry.method().clone().ok_or_else(|| {
                    DispatchError::new(DispatchErrorKind::Encoding(
                        "method entry lost its name".to_string(),
                    ))
                })?;
                let payload = match entry.select() {
                    Some(select) => serde_json::to_value(select).map_err(|e| {
                        DispatchError::new(DispatchErrorKind::Encoding(e.to_string()))
                    })?,
                    None => Value::Null,
                };
                Ok(BatchPlan::Procedure {
                    name,
                    payload: vec![payload],
                })
            }
            _ => Err(DispatchError::new(DispatchErrorKind::UnsupportedBatch)),
        }
    }

    /// Transport sub-path for this plan: the procedure name, or `http`.
    pub fn sub_path(&self) -> &str {
        match self {
            BatchPlan::Procedure { name, .. } => name,
            BatchPlan::Tables(_) => DEFAULT_SUB_PATH,
        }
    }

    /// The `{"body": [...]}` envelope sent over the wire.
    pub fn envelope(&self) -> Value {
        let rows = match self {
            BatchPlan::Procedure { payload, .. } => payload.clone(),
            BatchPlan::Tables(rows) => rows.iter().cloned().map(Value::Object).collect(),
        };
        let mut envelope = Map::new();
        envelope.insert(ENVELOPE_KEY.to_string(), Value::Array(rows));
        Value::Object(envelope)
    }
}
