//! Generation gateway for the Agronomist service.
//!
//! Wraps the Gemini `generateContent` REST endpoint behind the
//! [`GenerationDriver`](agronomist_interface::GenerationDriver) trait.

mod gemini;

pub use gemini::{
    API_KEY_ENV_VARS, DEFAULT_BASE_URL, DEFAULT_MODEL, GatewayConfig, GatewaySettings,
    GeminiClient, api_key_from_env,
};

/// Wire-level request/response types, exposed for inspection in tests.
pub mod dto {
    pub use crate::gemini::dto::*;
}
