//! Conversions between Agronomist types and the Gemini wire format.

use super::dto::{
    Blob, Content, GenerateContentRequest, GenerateContentResponse, Part, WireGenerationConfig,
    WireSafetySetting,
};
use agronomist_core::{ContentPart, GenerationConfig, SafetyPolicy};
use agronomist_error::{GenerationError, GenerationErrorKind};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

fn to_wire_part(part: &ContentPart) -> Part {
    match part {
        ContentPart::Text(text) => Part::Text { text: text.clone() },
        ContentPart::Image { bytes, mime_type } => Part::InlineData {
            inline_data: Blob {
                mime_type: mime_type.clone(),
                data: STANDARD.encode(bytes),
            },
        },
    }
}

/// Build a request body. Parts keep their order inside a single user turn.
pub fn to_request(
    parts: &[ContentPart],
    generation: &GenerationConfig,
    safety: &SafetyPolicy,
) -> Result<GenerateContentRequest, GenerationError> {
    let content = Content {
        role: "user".to_string(),
        parts: parts.iter().map(to_wire_part).collect(),
    };

    let generation_config = WireGenerationConfig {
        temperature: *generation.temperature(),
        top_p: *generation.top_p(),
        top_k: *generation.top_k(),
        max_output_tokens: *generation.max_output_tokens(),
    };

    let safety_settings = safety
        .settings()
        .iter()
        .map(|s| WireSafetySetting {
            category: s.category.api_name(),
            threshold: s.threshold.to_string(),
        })
        .collect::<Vec<_>>();

    GenerateContentRequest::builder()
        .contents(vec![content])
        .generation_config(generation_config)
        .safety_settings(safety_settings)
        .build()
        .map_err(|e| {
            GenerationError::new(GenerationErrorKind::ResponseParsing(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Extract generated text from a response.
///
/// Concatenates the text parts of the first candidate. A response with no
/// usable text yields an empty string, except when the prompt itself was
/// blocked and no candidate came back.
pub fn from_response(response: &GenerateContentResponse) -> Result<String, GenerationError> {
    let Some(candidate) = response.candidates.first() else {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_ref())
        {
            return Err(GenerationError::new(GenerationErrorKind::Blocked(
                reason.clone(),
            )));
        }
        return Ok(String::new());
    };

    Ok(candidate
        .content
        .as_ref()
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default())
}
