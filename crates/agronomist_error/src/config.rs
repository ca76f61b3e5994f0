//! Configuration error types.

/// Configuration error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// No API credential found in the environment or secret store
    MissingApiKey,
    /// Configuration sources could not be read or merged
    Load(String),
    /// A configuration value is present but unusable
    Invalid(String),
}

impl std::fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErrorKind::MissingApiKey => {
                write!(f, "GEMINI_API_KEY (or GOOGLE_API_KEY) environment variable not set")
            }
            ConfigErrorKind::Load(msg) => write!(f, "Failed to load configuration: {}", msg),
            ConfigErrorKind::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

/// Configuration error with source location.
///
/// Raised once at startup; there is no recovery path.
///
/// # Examples
///
/// ```
/// use agronomist_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
