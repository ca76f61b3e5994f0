//! Farmer location details.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Where the farmer is. Free-form, unvalidated, interpolated verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct LocationContext {
    /// Area or village
    area: String,
    /// District
    district: String,
    /// State
    state: String,
}

impl LocationContext {
    /// Creates a location from its three fields.
    pub fn new(
        area: impl Into<String>,
        district: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            district: district.into(),
            state: state.into(),
        }
    }
}
