//! Service identification endpoints.

use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct VersionResponse {
    pub app: &'static str,
    pub version: &'static str,
}

/// `GET /version`
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        app: config::APP_NAME,
        version: config::APP_VERSION,
    })
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// `GET /` — service banner.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Sintoma symptom analysis API running. Not for diagnostic use.",
    })
}
