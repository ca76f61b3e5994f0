//! Gemini REST client.

mod client;
mod config;
mod conversions;
pub(crate) mod dto;

pub use client::GeminiClient;
pub use self::config::{
    API_KEY_ENV_VARS, DEFAULT_BASE_URL, DEFAULT_MODEL, GatewayConfig, GatewaySettings,
    api_key_from_env,
};
