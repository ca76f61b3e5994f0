//! Missing file error types.

use std::path::{Path, PathBuf};

/// A file expected at submission time was not on disk.
///
/// # Examples
///
/// ```
/// use agronomist_error::NotFoundError;
///
/// let err = NotFoundError::new("temp_leaf.jpg");
/// assert!(format!("{}", err).contains("temp_leaf.jpg"));
/// ```
#[derive(Debug, Clone)]
pub struct NotFoundError {
    /// Path that was looked up
    pub path: PathBuf,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NotFoundError {
    /// Create a new not-found error with automatic location tracking.
    #[track_caller]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            path: path.as_ref().to_path_buf(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Not Found: could not find image {} at line {} in {}",
            self.path.display(),
            self.line,
            self.file
        )
    }
}

impl std::error::Error for NotFoundError {}
