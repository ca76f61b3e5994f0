//! Prompt templates.
//!
//! Builders are pure: same inputs, same string. User-supplied fields are
//! interpolated verbatim with no escaping.

use agronomist_core::{Language, LocationContext, SoilProfile};

/// Image analysis prompt, wrapped in a language directive.
///
/// # Examples
///
/// ```
/// use agronomist_advisor::build_disease_prompt;
/// use agronomist_core::{Language, LocationContext};
///
/// let location = LocationContext::new("Kuttanad", "Alappuzha", "Kerala");
/// let prompt = build_disease_prompt(&location, Language::Hindi);
/// assert!(prompt.starts_with("Provide the following response in Hindi: "));
/// assert!(prompt.contains("Alappuzha"));
/// ```
pub fn build_disease_prompt(location: &LocationContext, language: Language) -> String {
    let area = location.area();
    let district = location.district();
    let state = location.state();

    let body = format!(
        "As a highly skilled plant pathologist, analyze this plant image for a farmer in {area}, {district}, {state}. Please provide:
1. Disease identification (if any)
2. Severity assessment
3. Treatment recommendations
4. Regional context: Is this disease common in {district}? What factors in this region might affect its spread?
5. Preventive measures specific to this geographical area

Consider local climate patterns and common agricultural practices in {state} when making recommendations.
Please be concise and practical in your response."
    );

    format!("Provide the following response in {language}: {body}")
}

/// Region-level disease insights prompt. No language directive.
pub fn build_regional_insights_prompt(location: &LocationContext) -> String {
    let area = location.area();
    let district = location.district();
    let state = location.state();

    format!(
        "As an agricultural expert, provide insights about plant diseases in {area}, {district}, {state}:
1. What are the most common plant diseases in this region?
2. Which seasons are these diseases most prevalent?
3. What are the unique environmental factors in {district} that affect plant health?
4. What preventive measures do you recommend for farmers in this specific area?

Provide a concise, practical response focusing on local relevance."
    )
}

/// Crop recommendation prompt: labeled soil fields, then the instruction.
pub fn build_crop_prompt(soil: &SoilProfile) -> String {
    format!(
        "As an expert agricultural advisor, based on the following details:
- Soil Type: {}
- pH Level: {}
- Nutrient Content: {}
- Soil Texture: {}
- Location: {}

Suggest the best crops that can be planted in this region and soil type.
Provide reasons for your suggestions, including compatibility with soil, climate, and market demand.
Your response should be concise and farmer-friendly.",
        soil.soil_type(),
        soil.ph_level(),
        soil.nutrients(),
        soil.texture(),
        soil.location()
    )
}
