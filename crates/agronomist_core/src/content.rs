//! Content parts submitted to the generation model.

use serde::{Deserialize, Serialize};

/// A unit of material submitted in a generation call.
///
/// Order matters: instructional text generally precedes the image.
///
/// # Examples
///
/// ```
/// use agronomist_core::ContentPart;
///
/// let text = ContentPart::text("Describe this leaf");
/// assert_eq!(text.as_text(), Some("Describe this leaf"));
///
/// let image = ContentPart::image(vec![0xFF, 0xD8], "image/jpeg");
/// assert!(image.is_image());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ContentPart {
    /// Plain text.
    Text(String),

    /// Raw image bytes.
    Image {
        /// Raw, unencoded file contents
        bytes: Vec<u8>,
        /// MIME type reported to the model, e.g. "image/jpeg"
        mime_type: String,
    },
}

impl ContentPart {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text(text.into())
    }

    /// Creates an image part.
    pub fn image(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        ContentPart::Image {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Get the text content if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(text) => Some(text),
            ContentPart::Image { .. } => None,
        }
    }

    /// Returns true for image parts.
    pub fn is_image(&self) -> bool {
        matches!(self, ContentPart::Image { .. })
    }
}
