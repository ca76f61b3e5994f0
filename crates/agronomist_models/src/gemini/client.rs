//! Gemini REST client.

use super::config::GatewayConfig;
use super::conversions;
use super::dto::GenerateContentResponse;
use agronomist_core::ContentPart;
use agronomist_error::{ConfigError, ConfigErrorKind, GenerationError, GenerationErrorKind};
use agronomist_interface::GenerationDriver;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for the Gemini `generateContent` endpoint.
///
/// Construct once at startup and share. Each [`generate`](GenerationDriver::generate)
/// call issues exactly one HTTP request; failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    config: GatewayConfig,
    endpoint: String,
}

impl GeminiClient {
    /// Creates a client bound to the configured model.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the HTTP client cannot be built.
    #[instrument(skip_all, fields(model = %config.settings().model()))]
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(concat!("agronomist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Invalid(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        let endpoint = config.endpoint();
        debug!(url = %endpoint, "Created Gemini client");

        Ok(Self {
            http,
            config,
            endpoint,
        })
    }

    /// Returns the gateway configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn classify(err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::new(GenerationErrorKind::Timeout)
        } else {
            GenerationError::new(GenerationErrorKind::Network(err.to_string()))
        }
    }
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    #[instrument(skip(self, parts), fields(model = %self.model_name(), parts = parts.len()))]
    async fn generate(&self, parts: &[ContentPart]) -> Result<String, GenerationError> {
        let settings = self.config.settings();
        let request = conversions::to_request(parts, settings.generation(), settings.safety())?;

        debug!(
            images = parts.iter().filter(|p| p.is_image()).count(),
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                Self::classify(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "API error");
            return Err(GenerationError::new(GenerationErrorKind::Http {
                status_code: status.as_u16(),
                message,
            }));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            if e.is_timeout() {
                GenerationError::new(GenerationErrorKind::Timeout)
            } else {
                GenerationError::new(GenerationErrorKind::ResponseParsing(e.to_string()))
            }
        })?;

        let text = conversions::from_response(&body)?;
        debug!(
            candidates = body.candidates.len(),
            chars = text.len(),
            "Received response"
        );
        Ok(text)
    }

    fn model_name(&self) -> &str {
        self.config.settings().model()
    }
}
