//! Dispatch error types.

/// Kinds of dispatch errors.
///
/// These cover failures detected before any transport or storage access:
/// malformed batches, routing dead ends, and wire-encoding problems.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DispatchErrorKind {
    /// A batch combined a remote-procedure entry with other entries, or
    /// carried more than one remote-procedure entry.
    #[display("Http request not supported multiple Methods")]
    UnsupportedBatch,
    /// A batch contained no entries.
    #[display("empty query batch")]
    EmptyBatch,
    /// No connectivity and no local storage fallback available.
    #[display("no internet connection")]
    Offline,
    /// A remote-procedure call was routed to a local-only storage provider.
    #[display("storage providers cannot serve remote-procedure calls: {}", _0)]
    MethodNotAllowed(String),
    /// A descriptor could not be encoded for the wire.
    #[display("Encoding error: {}", _0)]
    Encoding(String),
}

/// Dispatch error with location tracking.
///
/// # Examples
///
/// ```
/// use caravel_error::{DispatchError, DispatchErrorKind};
///
/// let err = DispatchError::new(DispatchErrorKind::Offline);
/// assert!(format!("{}", err).contains("no internet connection"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Dispatch Error: {} at line {} in {}", kind, line, file)]
pub struct DispatchError {
    /// The kind of error that occurred
    pub kind: DispatchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DispatchError {
    /// Create a new dispatch error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DispatchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
