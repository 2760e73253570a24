//! Transport error types.

/// Kinds of transport errors.
///
/// Transport failures are surfaced to callers unmodified; the dispatcher
/// performs no retries or recovery on top of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// The request never produced a response.
    #[display("Network error: {}", _0)]
    Network(String),
    /// The server answered with a non-2xx status.
    #[display("Status {}: {}", status, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },
    /// The response body could not be decoded.
    #[display("Decode error: {}", _0)]
    Decode(String),
}

/// Transport error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new transport error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
