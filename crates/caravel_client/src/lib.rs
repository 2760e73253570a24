//! Query dispatcher and collaborator seams for the Caravel library.
//!
//! The [`QueryDispatcher`] translates declarative query batches into remote
//! HTTP calls or calls into an injected storage provider, depending on
//! connectivity and per-call options. Collaborators plug in behind small
//! traits: [`HttpTransport`], [`Connectivity`], [`StorageProvider`], and
//! [`DeviceIdSource`].

mod config;
mod connectivity;
mod device;
mod dispatcher;
mod endpoint;
mod options;
mod storage;
mod transport;

pub use config::DispatcherConfig;
pub use connectivity::{Connectivity, SharedConnectivity};
pub use device::{DeviceIdSource, GeneratedDeviceId, Session};
pub use dispatcher::{QueryDispatcher, QueryDispatcherBuilder};
pub use endpoint::{Endpoint, EndpointBuilder};
pub use options::{DispatchOptions, DispatchOptionsBuilder};
pub use storage::StorageProvider;
pub use transport::{HttpTransport, ReqwestTransport};
