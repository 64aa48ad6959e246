//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! CORS is permissive: the service is a local decision-support demo
//! fronted by a browser SPA, and the original deployment allowed a
//! wildcard origin alongside its dev origin.

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router with its CORS layer.
pub fn api_router(core: Arc<CoreState>) -> Router {
    let ctx = ApiContext::new(core);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(endpoints::meta::root))
        .route(
            "/analyze",
            get(endpoints::analyze::usage).post(endpoints::analyze::analyze),
        )
        .route("/health", get(endpoints::health::check))
        .route("/version", get(endpoints::meta::version))
        .with_state(ctx)
        .layer(cors)
}
