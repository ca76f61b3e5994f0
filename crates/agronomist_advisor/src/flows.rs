//! The disease and crop flows.
//!
//! Every flow issues its generation calls one at a time and returns errors
//! to the caller untouched.

use crate::image::load_image;
use crate::prompts::{build_crop_prompt, build_disease_prompt, build_regional_insights_prompt};
use crate::sanitize::sanitize;
use crate::upload::TempUpload;
use agronomist_core::{ContentPart, DiseaseReport, Language, LocationContext, SoilProfile};
use agronomist_error::AgronomistResult;
use agronomist_interface::GenerationDriver;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Analyze the image at `image_path`. Output is sanitized.
#[instrument(skip(driver, location), fields(model = %driver.model_name(), image = %image_path.display()))]
pub async fn disease_analysis<D>(
    driver: &D,
    image_path: &Path,
    language: Language,
    location: &LocationContext,
) -> AgronomistResult<String>
where
    D: GenerationDriver + ?Sized,
{
    let prompt = build_disease_prompt(location, language);
    let image = load_image(image_path).await?;

    let raw = driver.generate(&[ContentPart::text(prompt), image]).await?;
    debug!(chars = raw.len(), "Disease analysis received");
    Ok(sanitize(&raw))
}

/// Region-level insights for `location`. Text only; output is sanitized.
#[instrument(skip_all, fields(model = %driver.model_name(), district = %location.district()))]
pub async fn regional_insights<D>(driver: &D, location: &LocationContext) -> AgronomistResult<String>
where
    D: GenerationDriver + ?Sized,
{
    let prompt = build_regional_insights_prompt(location);
    let raw = driver.generate(&[ContentPart::text(prompt)]).await?;
    Ok(sanitize(&raw))
}

/// Full disease flow for an uploaded image.
///
/// Stages `bytes` as `temp_<upload_name>` in `upload_dir`, runs the image
/// analysis and then the regional insights call. The staged file is removed
/// whether or not either call succeeds.
#[instrument(skip(driver, bytes, location), fields(size = bytes.len()))]
pub async fn analyze_disease<D>(
    driver: &D,
    upload_dir: &Path,
    upload_name: &str,
    bytes: &[u8],
    language: Language,
    location: &LocationContext,
) -> AgronomistResult<DiseaseReport>
where
    D: GenerationDriver + ?Sized,
{
    let upload = TempUpload::create(upload_dir, upload_name, bytes).await?;

    let analysis = disease_analysis(driver, upload.path(), language, location).await?;
    let insights = regional_insights(driver, location).await?;

    info!("Disease analysis complete");
    Ok(DiseaseReport::new(analysis, insights))
}

/// Crop recommendations for a soil profile.
///
/// The model's text is trimmed, not sanitized.
#[instrument(skip_all, fields(model = %driver.model_name(), soil_type = %soil.soil_type()))]
pub async fn suggest_crops<D>(driver: &D, soil: &SoilProfile) -> AgronomistResult<String>
where
    D: GenerationDriver + ?Sized,
{
    let prompt = build_crop_prompt(soil);
    let raw = driver.generate(&[ContentPart::text(prompt)]).await?;
    Ok(raw.trim().to_string())
}
