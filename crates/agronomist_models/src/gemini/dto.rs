//! Data transfer objects for the Gemini `generateContent` endpoint.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Binary data with MIME type. `data` is base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// MIME type of the data
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// One outbound part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content
    Text {
        /// The text
        text: String,
    },
    /// Inline binary data
    #[serde(rename_all = "camelCase")]
    InlineData {
        /// The inline blob
        inline_data: Blob,
    },
}

/// A turn of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    /// Always "user" for this service
    pub role: String,
    /// Ordered parts
    pub parts: Vec<Part>,
}

/// Sampling parameters in wire form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling mass
    pub top_p: f32,
    /// Top-k cutoff
    pub top_k: u32,
    /// Output token cap
    pub max_output_tokens: u32,
}

/// Safety setting in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireSafetySetting {
    /// e.g. "HARM_CATEGORY_HARASSMENT"
    pub category: String,
    /// e.g. "BLOCK_MEDIUM_AND_ABOVE"
    pub threshold: String,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// Conversation contents (a single user turn here)
    contents: Vec<Content>,
    /// Sampling parameters
    generation_config: WireGenerationConfig,
    /// Safety thresholds
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    safety_settings: Vec<WireSafetySetting>,
}

impl GenerateContentRequest {
    /// Creates a new builder for GenerateContentRequest.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// A part in a response. Non-text parts are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    /// Text, if this is a text part
    #[serde(default)]
    pub text: Option<String>,
}

/// Content of a response candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseContent {
    /// Generated parts
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content; absent when the candidate was filtered
    #[serde(default)]
    pub content: Option<ResponseContent>,
    /// Why generation stopped, e.g. "STOP" or "SAFETY"
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Set when the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Response body for `generateContent`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, possibly empty
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Prompt-level feedback
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}
