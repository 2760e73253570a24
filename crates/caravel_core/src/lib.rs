//! Core data types and wire encoding for the Caravel query-dispatch library.
//!
//! This crate provides the pure, transport-free half of the system: query
//! descriptors and their batch classification, the field/wire key remap
//! table, the nested bracket query-string codec, and the session header
//! value.

mod batch;
mod condition;
mod platform;
mod query;
pub mod query_string;
pub mod remap;
mod session;
mod verb;

pub use batch::{BatchPlan, DEFAULT_SUB_PATH, ENVELOPE_KEY};
pub use condition::Condition;
pub use platform::Platform;
pub use query::{OrderBy, QueryDescriptor, QueryDescriptorBuilder, SelectSpec};
pub use remap::WireKey;
pub use session::{SessionHeader, SessionInfo};
pub use verb::Verb;
