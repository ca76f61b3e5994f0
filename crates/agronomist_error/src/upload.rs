//! Upload handling error types.

/// Reasons an uploaded image could not be staged on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum UploadErrorKind {
    /// Extension is not one of jpg, jpeg or png
    #[display("Unsupported image type: {}", _0)]
    UnsupportedExtension(String),
    /// Filename is empty or contains path components
    #[display("Invalid upload filename: {}", _0)]
    InvalidFilename(String),
    /// Writing the temporary file failed
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Upload error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// The kind of error that occurred
    pub kind: UploadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UploadError {
    /// Create a new upload error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
