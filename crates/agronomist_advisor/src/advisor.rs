//! Shared entry point for the front-ends.

use crate::flows;
use agronomist_core::{DiseaseReport, Language, LocationContext, SoilProfile};
use agronomist_error::AgronomistResult;
use agronomist_interface::GenerationDriver;
use derive_getters::Getters;
use std::path::PathBuf;
use std::sync::Arc;

/// A generation driver plus the directory uploads are staged in.
///
/// Built once at startup and cloned into each request handler. Holds no
/// mutable state.
#[derive(Clone, Getters)]
pub struct Advisor {
    /// The generation backend
    driver: Arc<dyn GenerationDriver>,
    /// Directory for `temp_<name>` files
    upload_dir: PathBuf,
}

impl Advisor {
    /// Creates an advisor.
    pub fn new(driver: Arc<dyn GenerationDriver>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            driver,
            upload_dir: upload_dir.into(),
        }
    }

    /// Run the disease flow on an uploaded image.
    pub async fn analyze_disease(
        &self,
        upload_name: &str,
        bytes: &[u8],
        language: Language,
        location: &LocationContext,
    ) -> AgronomistResult<DiseaseReport> {
        flows::analyze_disease(
            self.driver.as_ref(),
            &self.upload_dir,
            upload_name,
            bytes,
            language,
            location,
        )
        .await
    }

    /// Run the crop flow.
    pub async fn suggest_crops(&self, soil: &SoilProfile) -> AgronomistResult<String> {
        flows::suggest_crops(self.driver.as_ref(), soil).await
    }
}

impl std::fmt::Debug for Advisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Advisor")
            .field("model", &self.driver.model_name())
            .field("upload_dir", &self.upload_dir)
            .finish()
    }
}
