//! Plant disease analysis and crop recommendation.
//!
//! This crate ties the workspace together: it re-exports the public types of
//! the member crates and provides the HTTP front-end in [`api`].
//!
//! # Example
//!
//! ```no_run
//! use agronomist::{Advisor, GatewayConfig, GeminiClient, SoilProfile};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::from_env(None)?;
//! let advisor = Advisor::new(Arc::new(GeminiClient::new(config)?), ".");
//!
//! let soil = SoilProfile::builder()
//!     .soil_type("Loamy")
//!     .ph_level("6.5")
//!     .nutrients("High N, Low P")
//!     .texture("60% sand, 30% silt")
//!     .location("Kerala, India")
//!     .build()?;
//! println!("{}", advisor.suggest_crops(&soil).await?);
//! # Ok(())
//! # }
//! ```

pub mod api;

pub use agronomist_advisor::{
    Advisor, IMAGE_MIME_TYPE, TempUpload, analyze_disease, build_crop_prompt,
    build_disease_prompt, build_regional_insights_prompt, disease_analysis, load_image,
    regional_insights, sanitize, suggest_crops,
};
pub use agronomist_core::{
    ContentPart, DiseaseReport, GenerationConfig, HarmBlockThreshold, HarmCategory, Language,
    LocationContext, SafetyPolicy, SafetySetting, SoilProfile,
};
pub use agronomist_error::{
    AgronomistError, AgronomistErrorKind, AgronomistResult, ConfigError, ConfigErrorKind,
    GenerationError, GenerationErrorKind, NotFoundError, UploadError, UploadErrorKind,
};
pub use agronomist_interface::GenerationDriver;
pub use agronomist_models::{GatewayConfig, GatewaySettings, GeminiClient};
