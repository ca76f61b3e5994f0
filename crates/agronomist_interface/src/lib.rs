//! Trait definitions for the Agronomist service.
//!
//! [`GenerationDriver`] is the seam between the advisory flows and the
//! remote model. The production implementation lives in
//! `agronomist_models`; tests substitute a fake.

use agronomist_core::ContentPart;
use agronomist_error::GenerationError;
use async_trait::async_trait;
use std::sync::Arc;

/// A backend that turns content parts into generated text.
///
/// Implementations submit the parts in order and resolve once a single
/// response (or failure) is available. They must not retry internally.
/// An empty string is a valid, degraded result (e.g. safety-filtered output).
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Submit `parts` and return the raw generated text.
    async fn generate(&self, parts: &[ContentPart]) -> Result<String, GenerationError>;

    /// Identifier of the model this driver talks to.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D> GenerationDriver for Arc<D>
where
    D: GenerationDriver + ?Sized,
{
    async fn generate(&self, parts: &[ContentPart]) -> Result<String, GenerationError> {
        (**self).generate(parts).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
