//! HTTP front-end.
//!
//! | Route | Body | Response |
//! |---|---|---|
//! | `GET /health` | | `{"status":"healthy"}` |
//! | `GET /api/languages` | | `["English", ...]` |
//! | `POST /api/crop` | JSON soil profile | `{"suggestions": ...}` |
//! | `POST /api/disease` | multipart `image`, `language`, `area`, `district`, `state` | `{"analysis": ..., "regional_insights": ...}` |
//!
//! Failures come back as `{"error": ...}`; one failed request never takes
//! the server down.

use agronomist_advisor::Advisor;
use agronomist_core::{Language, LocationContext, SoilProfile};
use agronomist_error::{AgronomistError, AgronomistErrorKind};
use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::str::FromStr;
use tracing::{error, info, instrument, warn};

/// Largest accepted request body.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// API server state.
#[derive(Clone, Debug)]
pub struct ApiState {
    /// Shared, read-only advisor
    pub advisor: Advisor,
}

/// Creates the API router.
pub fn create_router(advisor: Advisor) -> Router {
    let state = ApiState { advisor };

    Router::new()
        .route("/health", get(health_check))
        .route("/api/languages", get(list_languages))
        .route("/api/crop", post(recommend_crops))
        .route("/api/disease", post(detect_disease))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Error returned by handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Request was malformed before reaching a flow
    BadRequest(String),
    /// A flow failed
    Flow(AgronomistError),
}

impl From<AgronomistError> for ApiError {
    fn from(err: AgronomistError) -> Self {
        ApiError::Flow(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::BadRequest(format!("Invalid multipart body: {}", err))
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(err: MultipartRejection) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Flow(err) => {
                let status = match err.kind() {
                    AgronomistErrorKind::Upload(_) => StatusCode::BAD_REQUEST,
                    AgronomistErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
                    AgronomistErrorKind::Generation(_) => StatusCode::BAD_GATEWAY,
                    AgronomistErrorKind::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.to_string())
            }
        };

        if status.is_server_error() {
            error!(status = %status, error = %message, "Request failed");
        } else {
            warn!(status = %status, error = %message, "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Supported response languages.
async fn list_languages() -> impl IntoResponse {
    Json(Language::all())
}

/// Crop recommendation from a JSON soil profile.
#[instrument(skip_all)]
async fn recommend_crops(
    State(state): State<ApiState>,
    soil: Result<Json<SoilProfile>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(soil) = soil?;
    let suggestions = state.advisor.suggest_crops(&soil).await?;
    info!(chars = suggestions.len(), "Crop suggestions served");
    Ok(Json(json!({ "suggestions": suggestions })))
}

/// Disease analysis from a multipart upload.
#[instrument(skip_all)]
async fn detect_disease(
    State(state): State<ApiState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart?;
    let mut image: Option<(String, Vec<u8>)> = None;
    let mut language = Language::default();
    let mut area = String::new();
    let mut district = String::new();
    let mut region_state = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| ApiError::BadRequest("image field has no filename".into()))?;
                let bytes = field.bytes().await?;
                image = Some((file_name, bytes.to_vec()));
            }
            "language" => {
                let value = field.text().await?;
                language = Language::from_str(value.trim()).map_err(|_| {
                    ApiError::BadRequest(format!("Unsupported language: {}", value))
                })?;
            }
            "area" => area = field.text().await?,
            "district" => district = field.text().await?,
            "state" => region_state = field.text().await?,
            other => warn!(field = other, "Ignoring unknown multipart field"),
        }
    }

    let (file_name, bytes) =
        image.ok_or_else(|| ApiError::BadRequest("missing image upload".into()))?;
    let location = LocationContext::new(area, district, region_state);

    let report = state
        .advisor
        .analyze_disease(&file_name, &bytes, language, &location)
        .await?;

    info!(language = %language, "Disease analysis served");
    Ok(Json(report))
}
