//! Error types for the Agronomist service.
//!
//! Every error records the source location where it was raised. Domain
//! errors convert into [`AgronomistError`] through `?`.

mod config;
mod generation;
mod not_found;
mod upload;

pub use config::{ConfigError, ConfigErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use not_found::NotFoundError;
pub use upload::{UploadError, UploadErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum AgronomistErrorKind {
    /// Missing credential or unusable configuration
    Config(ConfigError),
    /// Image path missing at submission time
    NotFound(NotFoundError),
    /// Remote generation call failed
    Generation(GenerationError),
    /// Uploaded file could not be staged
    Upload(UploadError),
}

impl std::fmt::Display for AgronomistErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgronomistErrorKind::Config(e) => write!(f, "{}", e),
            AgronomistErrorKind::NotFound(e) => write!(f, "{}", e),
            AgronomistErrorKind::Generation(e) => write!(f, "{}", e),
            AgronomistErrorKind::Upload(e) => write!(f, "{}", e),
        }
    }
}

/// Agronomist error with kind discrimination.
#[derive(Debug)]
pub struct AgronomistError(Box<AgronomistErrorKind>);

impl AgronomistError {
    /// Create a new error from a kind.
    pub fn new(kind: AgronomistErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AgronomistErrorKind {
        &self.0
    }
}

impl std::fmt::Display for AgronomistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agronomist Error: {}", self.0)
    }
}

impl std::error::Error for AgronomistError {}

impl<T> From<T> for AgronomistError
where
    T: Into<AgronomistErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Agronomist operations.
pub type AgronomistResult<T> = std::result::Result<T, AgronomistError>;
