//! REST API handlers for the form builder
//!
//! Exposes the compiler and answer validation over HTTP for callers that do
//! not run the browser UI, plus the session options the UI reads at start.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uiform_core::{compile_text, validate_value, CompiledField, ValidationError};

use crate::config::Settings;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub settings: Arc<RwLock<Settings>>,
}

// ============================================================================
// Response Envelope
// ============================================================================

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// Compile
// ============================================================================

/// POST /api/compile - body is raw UI schema text
pub async fn compile_schema(body: String) -> Response {
    match compile_text(&body) {
        Ok(schema) => (StatusCode::OK, Json(ApiResponse::success(schema))).into_response(),
        Err(e) => {
            warn!("Rejected UI schema: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::<CompiledField>::error(e.to_string())),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Validate
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub schema: CompiledField,
    #[serde(rename = "formData", default)]
    pub form_data: Value,
}

/// POST /api/validate - check answers against a compiled schema
pub async fn validate_answers(Json(request): Json<ValidateRequest>) -> impl IntoResponse {
    let errors: Vec<ValidationError> = validate_value(&request.schema, &request.form_data);
    debug!(errors = errors.len(), "Validated form data");
    (StatusCode::OK, Json(ApiResponse::success(errors)))
}

// ============================================================================
// Settings
// ============================================================================

/// GET /api/settings - session options for the browser UI
pub async fn get_session_options(State(state): State<ApiState>) -> impl IntoResponse {
    let settings = state.settings.read().await;
    (StatusCode::OK, Json(ApiResponse::success(settings.session)))
}
