//! Error types for the Caravel query-dispatch library.
//!
//! This crate provides the foundation error types used throughout the
//! Caravel ecosystem: one module per concern plus a combined crate-level
//! error for call sites that cross concern boundaries.

mod config;
mod dispatch;
mod session;
mod storage;
mod transport;

pub use config::ConfigError;
pub use dispatch::{DispatchError, DispatchErrorKind, DispatchResult};
pub use session::{SessionError, SessionErrorKind, SessionResult};
pub use storage::{StorageError, StorageErrorKind, StorageResult};
pub use transport::{TransportError, TransportErrorKind, TransportResult};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum CaravelErrorKind {
    /// Batch classification or routing error
    Dispatch(DispatchError),
    /// HTTP transport error, surfaced unmodified
    Transport(TransportError),
    /// Storage provider error, surfaced unmodified
    Storage(StorageError),
    /// Session initialization error
    Session(SessionError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for CaravelErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaravelErrorKind::Dispatch(e) => write!(f, "{}", e),
            CaravelErrorKind::Transport(e) => write!(f, "{}", e),
            CaravelErrorKind::Storage(e) => write!(f, "{}", e),
            CaravelErrorKind::Session(e) => write!(f, "{}", e),
            CaravelErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Caravel error with kind discrimination.
#[derive(Debug)]
pub struct CaravelError(Box<CaravelErrorKind>);

impl CaravelError {
    /// Create a new error from a kind.
    pub fn new(kind: CaravelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CaravelErrorKind {
        &self.0
    }
}

impl std::fmt::Display for CaravelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caravel Error: {}", self.0)
    }
}

impl std::error::Error for CaravelError {}

// Generic From implementation for any type that converts to CaravelErrorKind
impl<T> From<T> for CaravelError
where
    T: Into<CaravelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Caravel operations.
pub type CaravelResult<T> = std::result::Result<T, CaravelError>;
