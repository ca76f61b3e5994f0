//! End-to-end tests for the disease and crop flows.

mod test_utils;

use agronomist_advisor::{
    Advisor, IMAGE_MIME_TYPE, analyze_disease, disease_analysis, regional_insights,
    suggest_crops,
};
use agronomist_core::{ContentPart, Language, LocationContext, SoilProfile};
use agronomist_error::{AgronomistErrorKind, GenerationErrorKind, UploadErrorKind};
use std::sync::Arc;
use test_utils::{FakeDriver, FakeReply};

fn kuttanad() -> LocationContext {
    LocationContext::new("Kuttanad", "Alappuzha", "Kerala")
}

fn loamy() -> SoilProfile {
    SoilProfile::builder()
        .soil_type("Loamy")
        .ph_level("6.5")
        .nutrients("High N, Low P")
        .texture("60% sand, 30% silt")
        .location("Kerala, India")
        .build()
        .unwrap()
}

fn dir_is_empty(dir: &std::path::Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

#[tokio::test]
async fn test_disease_flow_submits_prompt_then_image() {
    let dir = tempfile::tempdir().unwrap();
    let driver = FakeDriver::texts(&["**Leaf blight**, moderate", "Monsoon, humidity"])
        .watching(dir.path());

    let report = analyze_disease(
        &driver,
        dir.path(),
        "leaf.png",
        b"raw image bytes",
        Language::Hindi,
        &kuttanad(),
    )
    .await
    .unwrap();

    assert_eq!(report.analysis(), "Leaf blight moderate");
    assert_eq!(report.regional_insights(), "Monsoon humidity");

    let calls = driver.calls();
    assert_eq!(calls.len(), 2);

    let first = &calls[0];
    assert_eq!(first.len(), 2);
    let prompt = first[0].as_text().unwrap();
    assert!(prompt.starts_with("Provide the following response in Hindi: "));
    assert!(prompt.contains("Alappuzha"));
    assert_eq!(
        first[1],
        ContentPart::image(b"raw image bytes".to_vec(), IMAGE_MIME_TYPE)
    );

    let second = &calls[1];
    assert_eq!(second.len(), 1);
    assert!(second[0].as_text().unwrap().starts_with("As an agricultural expert"));

    // Staged while the calls ran, gone afterwards.
    assert_eq!(driver.snapshots()[0], vec!["temp_leaf.png".to_string()]);
    assert!(dir_is_empty(dir.path()));
}

#[tokio::test]
async fn test_gateway_failure_still_removes_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let driver = FakeDriver::new(vec![FakeReply::NetworkFault]).watching(dir.path());

    let err = analyze_disease(
        &driver,
        dir.path(),
        "leaf.jpg",
        b"bytes",
        Language::English,
        &kuttanad(),
    )
    .await
    .unwrap_err();

    match err.kind() {
        AgronomistErrorKind::Generation(e) => {
            assert!(matches!(e.kind, GenerationErrorKind::Network(_)))
        }
        other => panic!("expected generation error, got {other:?}"),
    }
    assert_eq!(driver.calls().len(), 1);
    assert_eq!(driver.snapshots()[0], vec!["temp_leaf.jpg".to_string()]);
    assert!(dir_is_empty(dir.path()));
}

#[tokio::test]
async fn test_second_call_failure_still_removes_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let driver = FakeDriver::new(vec![
        FakeReply::Text("analysis".into()),
        FakeReply::NetworkFault,
    ]);

    let result = analyze_disease(
        &driver,
        dir.path(),
        "leaf.jpeg",
        b"bytes",
        Language::Tamil,
        &kuttanad(),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(driver.calls().len(), 2);
    assert!(dir_is_empty(dir.path()));
}

#[tokio::test]
async fn test_unsupported_upload_makes_no_calls() {
    let dir = tempfile::tempdir().unwrap();
    let driver = FakeDriver::texts(&["unused"]);

    let err = analyze_disease(
        &driver,
        dir.path(),
        "leaf.gif",
        b"bytes",
        Language::English,
        &kuttanad(),
    )
    .await
    .unwrap_err();

    match err.kind() {
        AgronomistErrorKind::Upload(e) => {
            assert_eq!(e.kind, UploadErrorKind::UnsupportedExtension("gif".into()))
        }
        other => panic!("expected upload error, got {other:?}"),
    }
    assert!(driver.calls().is_empty());
    assert!(dir_is_empty(dir.path()));
}

#[tokio::test]
async fn test_missing_image_is_not_found_and_skips_generation() {
    let dir = tempfile::tempdir().unwrap();
    let driver = FakeDriver::texts(&["unused"]);

    let err = disease_analysis(
        &driver,
        &dir.path().join("gone.jpg"),
        Language::English,
        &kuttanad(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err.kind(), AgronomistErrorKind::NotFound(_)));
    assert!(driver.calls().is_empty());
}

#[tokio::test]
async fn test_empty_generation_is_displayed_as_empty() {
    let driver = FakeDriver::texts(&[""]);
    let text = regional_insights(&driver, &kuttanad()).await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn test_crop_flow_trims_but_does_not_sanitize() {
    let raw = "  Rice, Wheat *best*\n";

    let driver = FakeDriver::texts(&[raw]);
    let crops = suggest_crops(&driver, &loamy()).await.unwrap();
    assert_eq!(crops, "Rice, Wheat *best*");

    let driver = FakeDriver::texts(&[raw]);
    let insights = regional_insights(&driver, &kuttanad()).await.unwrap();
    assert_eq!(insights.trim(), "Rice Wheat best");
}

#[tokio::test]
async fn test_crop_prompt_is_single_text_part() {
    let driver = FakeDriver::texts(&["Banana"]);
    suggest_crops(&driver, &loamy()).await.unwrap();

    let calls = driver.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 1);
    assert!(!calls[0][0].is_image());

    let prompt = calls[0][0].as_text().unwrap();
    for value in [
        "Soil Type: Loamy",
        "pH Level: 6.5",
        "Nutrient Content: High N, Low P",
        "Soil Texture: 60% sand, 30% silt",
        "Location: Kerala, India",
    ] {
        assert!(prompt.contains(value), "missing {value}");
    }
}

#[tokio::test]
async fn test_advisor_delegates_to_flows() {
    let dir = tempfile::tempdir().unwrap();
    let driver = Arc::new(FakeDriver::texts(&["a*", "b,", " crops "]));
    let advisor = Advisor::new(driver.clone(), dir.path());

    let report = advisor
        .analyze_disease("leaf.png", b"x", Language::Malayalam, &kuttanad())
        .await
        .unwrap();
    assert_eq!(report.analysis(), "a");
    assert_eq!(report.regional_insights(), "b");

    assert_eq!(advisor.suggest_crops(&loamy()).await.unwrap(), "crops");
    assert_eq!(driver.calls().len(), 3);
    assert!(dir_is_empty(dir.path()));
}
