//! Generation gateway error types.

/// Failure conditions of a single generation call.
///
/// None of these are retried: the gateway surfaces them to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Connection could not be established or was dropped
    #[display("Network fault: {}", _0)]
    Network(String),
    /// Request exceeded the configured timeout
    #[display("Request timed out")]
    Timeout,
    /// Remote endpoint answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
    /// The prompt itself was rejected by the safety filter
    #[display("Prompt blocked by safety filter: {}", _0)]
    Blocked(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use agronomist_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Http {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
