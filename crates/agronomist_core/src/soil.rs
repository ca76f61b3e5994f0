//! Soil parameters for crop recommendation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// User-supplied soil description. All fields are free-form strings.
///
/// # Examples
///
/// ```
/// use agronomist_core::SoilProfile;
///
/// let soil = SoilProfile::builder()
///     .soil_type("Loamy")
///     .ph_level("6.5")
///     .nutrients("High N, Low P")
///     .texture("60% sand, 30% silt")
///     .location("Kerala, India")
///     .build()
///     .unwrap();
/// assert_eq!(soil.ph_level(), "6.5");
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SoilProfile {
    /// Soil type, e.g. "Loamy"
    soil_type: String,
    /// pH level as entered
    ph_level: String,
    /// Nutrient content description
    nutrients: String,
    /// Soil texture description
    texture: String,
    /// Location description
    location: String,
}

impl SoilProfile {
    /// Returns a builder for constructing a SoilProfile.
    pub fn builder() -> SoilProfileBuilder {
        SoilProfileBuilder::default()
    }
}
