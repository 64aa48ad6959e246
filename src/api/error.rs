//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::engine::AnalysisError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
///
/// Validation failures (400) carry enough detail to correct the request;
/// `ModelNotLoaded` is a 503 so callers can tell "retry later" apart from
/// "fix your input".
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("At least one symptom is required")]
    EmptyInput,
    #[error("Supplied symptoms are not recognized")]
    UnrecognizedSymptoms,
    #[error("Model not loaded")]
    ModelNotLoaded,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::EmptyInput => (
                StatusCode::BAD_REQUEST,
                "EMPTY_INPUT",
                "At least one symptom is required.".to_string(),
            ),
            ApiError::UnrecognizedSymptoms => (
                StatusCode::BAD_REQUEST,
                "UNRECOGNIZED_SYMPTOMS",
                "Supplied symptoms are not recognized.".to_string(),
            ),
            ApiError::ModelNotLoaded => (
                StatusCode::SERVICE_UNAVAILABLE,
                "MODEL_NOT_LOADED",
                "Model artifacts are not loaded yet. Retry later.".to_string(),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyInput => ApiError::EmptyInput,
            AnalysisError::UnrecognizedSymptoms => ApiError::UnrecognizedSymptoms,
            AnalysisError::ModelNotLoaded => ApiError::ModelNotLoaded,
            AnalysisError::LockPoisoned => ApiError::Internal("lock poisoned".into()),
        }
    }
}
