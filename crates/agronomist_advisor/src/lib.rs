//! Prompt orchestration for the Agronomist service.
//!
//! Two independent flows share one [`GenerationDriver`](agronomist_interface::GenerationDriver):
//!
//! - **Disease**: image + language + location → analysis prompt with the image
//!   → sanitize → regional prompt → sanitize.
//! - **Crop**: soil profile → crop prompt → trim.
//!
//! Disease output is sanitized; crop output is only trimmed.

mod advisor;
mod flows;
mod image;
mod prompts;
mod sanitize;
mod upload;

pub use advisor::Advisor;
pub use flows::{analyze_disease, disease_analysis, regional_insights, suggest_crops};
pub use image::{IMAGE_MIME_TYPE, load_image};
pub use prompts::{build_crop_prompt, build_disease_prompt, build_regional_insights_prompt};
pub use sanitize::sanitize;
pub use upload::{ALLOWED_EXTENSIONS, TEMP_PREFIX, TempUpload};
