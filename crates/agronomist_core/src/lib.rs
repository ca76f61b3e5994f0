//! Core data types for the Agronomist service.
//!
//! Everything here is request-scoped except [`GenerationConfig`] and
//! [`SafetyPolicy`], which are built once at startup and shared read-only.

mod content;
mod generation;
mod language;
mod location;
mod report;
mod safety;
mod soil;

pub use content::ContentPart;
pub use generation::{GenerationConfig, GenerationConfigBuilder};
pub use language::Language;
pub use location::LocationContext;
pub use report::DiseaseReport;
pub use safety::{HarmBlockThreshold, HarmCategory, SafetyPolicy, SafetySetting};
pub use soil::{SoilProfile, SoilProfileBuilder};
