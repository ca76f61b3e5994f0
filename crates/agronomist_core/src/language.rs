//! Response languages offered to users.

use serde::{Deserialize, Serialize};

/// Language the disease analysis is written in.
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
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Malayalam,
    Tamil,
    Telugu,
}

impl Language {
    /// All supported languages in display order.
    pub fn all() -> Vec<Language> {
        use strum::IntoEnumIterator;
        Language::iter().collect()
    }
}
