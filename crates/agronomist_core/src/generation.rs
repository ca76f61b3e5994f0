//! Sampling parameters for the generation model.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Sampling parameters applied to every generation call.
///
/// Set once at startup. Defaults match the values the advisory prompts
/// were tuned against.
///
/// # Examples
///
/// ```
/// use agronomist_core::{GenerationConfig, GenerationConfigBuilder};
///
/// let config = GenerationConfig::default();
/// assert_eq!(*config.top_k(), 32);
///
/// let cooler = GenerationConfigBuilder::default()
///     .temperature(0.1)
///     .build()
///     .unwrap();
/// assert_eq!(*cooler.max_output_tokens(), 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(default)]
#[serde(default)]
pub struct GenerationConfig {
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling probability mass
    top_p: f32,
    /// Number of highest-probability tokens considered
    top_k: u32,
    /// Upper bound on generated tokens
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_p: 1.0,
            top_k: 32,
            max_output_tokens: 4096,
        }
    }
}
