//! Safety thresholds applied by the remote model.

use serde::{Deserialize, Serialize};

/// Categories of harmful content.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmCategory {
    /// Harassment content
    Harassment,
    /// Hate speech content
    HateSpeech,
    /// Sexually explicit content
    SexuallyExplicit,
    /// Dangerous content
    DangerousContent,
}

impl HarmCategory {
    /// Category name as the remote API spells it.
    pub fn api_name(&self) -> String {
        format!("HARM_CATEGORY_{}", self)
    }
}

/// Thresholds for blocking harmful content.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    /// Never block
    BlockNone,
    /// Block low probability and above
    BlockLowAndAbove,
    /// Block medium probability and above
    #[default]
    BlockMediumAndAbove,
    /// Block only high probability
    BlockOnlyHigh,
}

/// One (category, threshold) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SafetySetting {
    /// The harm category to configure
    pub category: HarmCategory,
    /// The blocking threshold for this category
    pub threshold: HarmBlockThreshold,
}

/// Process-wide set of safety settings.
///
/// # Examples
///
/// ```
/// use agronomist_core::{HarmBlockThreshold, SafetyPolicy};
///
/// let policy = SafetyPolicy::default();
/// assert_eq!(policy.settings().len(), 4);
/// assert!(policy
///     .settings()
///     .iter()
///     .all(|s| s.threshold == HarmBlockThreshold::BlockMediumAndAbove));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafetyPolicy(Vec<SafetySetting>);

impl SafetyPolicy {
    /// Creates a policy from explicit settings.
    pub fn new(settings: Vec<SafetySetting>) -> Self {
        Self(settings)
    }

    /// Applies one threshold to every known category.
    pub fn uniform(threshold: HarmBlockThreshold) -> Self {
        use strum::IntoEnumIterator;

        Self(
            HarmCategory::iter()
                .map(|category| SafetySetting {
                    category,
                    threshold,
                })
                .collect(),
        )
    }

    /// The configured settings in order.
    pub fn settings(&self) -> &[SafetySetting] {
        &self.0
    }
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self::uniform(HarmBlockThreshold::BlockMediumAndAbove)
    }
}
