//! Disease flow output.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The two sanitized text blocks produced by the disease flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct DiseaseReport {
    /// Image-based disease analysis
    analysis: String,
    /// Region-level disease insights
    regional_insights: String,
}
