//! Symptom analysis endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{AnalyzeRequest, ApiContext};
use crate::engine::{self, AnalysisResult};

/// `POST /analyze` — run the full analysis pipeline for one request.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let result = engine::analyze(&ctx.core, &req.symptoms)?;
    Ok(Json(result))
}

#[derive(Serialize)]
pub struct UsageResponse {
    pub message: &'static str,
    pub example: UsageExample,
}

#[derive(Serialize)]
pub struct UsageExample {
    pub symptoms: &'static [&'static str],
    pub age: u32,
    pub gender: &'static str,
}

/// `GET /analyze` — usage hint for anyone poking the endpoint in a browser.
pub async fn usage() -> Json<UsageResponse> {
    Json(UsageResponse {
        message: "Use POST /analyze with JSON body.",
        example: UsageExample {
            symptoms: &["fever", "cough"],
            age: 18,
            gender: "male",
        },
    })
}
