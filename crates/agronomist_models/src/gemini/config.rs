//! Gateway configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `AGRONOMIST_`-prefixed environment variables (nested keys separated by
//! `__`, e.g. `AGRONOMIST_GENERATION__TEMPERATURE=0.2`). The API credential
//! is read separately and never comes from the settings file.

use agronomist_core::{GenerationConfig, SafetyPolicy};
use agronomist_error::{ConfigError, ConfigErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini REST API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API credential, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

const DEFAULT_CONFIG_FILE: &str = "agronomist";
const ENV_PREFIX: &str = "AGRONOMIST";

/// Non-secret gateway settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct GatewaySettings {
    /// Model identifier
    model: String,
    /// API root, without trailing slash
    base_url: String,
    /// Sampling parameters
    generation: GenerationConfig,
    /// Safety thresholds
    safety: SafetyPolicy,
    /// Whole-request timeout in seconds
    request_timeout_secs: u64,
    /// TCP connect timeout in seconds
    connect_timeout_secs: u64,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            generation: GenerationConfig::default(),
            safety: SafetyPolicy::default(),
            request_timeout_secs: 120,
            connect_timeout_secs: 10,
        }
    }
}

impl GatewaySettings {
    /// Load settings from defaults, a config file and the environment.
    ///
    /// With `path` set the file must exist; otherwise `agronomist.toml` in
    /// the working directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source cannot be read or a value has
    /// the wrong type.
    #[instrument(skip_all, fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = config::Config::try_from(&Self::default())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?;

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings: Self = config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?;

        debug!(model = %settings.model, base_url = %settings.base_url, "Gateway settings loaded");
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::Invalid(
                "model must not be empty".into(),
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::new(ConfigErrorKind::Invalid(
                "request_timeout_secs must be positive".into(),
            )));
        }
        Ok(())
    }
}

/// Read the API credential from the first non-empty variable in
/// [`API_KEY_ENV_VARS`].
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Everything the gateway needs: settings plus credential.
#[derive(Clone, Getters)]
pub struct GatewayConfig {
    /// API credential
    #[getter(skip)]
    api_key: String,
    /// Non-secret settings
    settings: GatewaySettings,
}

impl GatewayConfig {
    /// Combine loaded settings with a credential.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigErrorKind::MissingApiKey`] when `api_key` is absent
    /// or blank.
    pub fn new(settings: GatewaySettings, api_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::new(ConfigErrorKind::MissingApiKey))?;
        Ok(Self { api_key, settings })
    }

    /// Load settings and read the credential from the environment.
    pub fn from_env(path: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = GatewaySettings::load(path)?;
        Self::new(settings, api_key_from_env())
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Full URL of the generateContent endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// Whole-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.settings.request_timeout_secs)
    }

    /// TCP connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.settings.connect_timeout_secs)
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("settings", &self.settings)
            .finish()
    }
}
