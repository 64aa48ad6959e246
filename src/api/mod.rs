//! HTTP transport layer.
//!
//! A thin axum surface over the engine: request marshalling, typed error →
//! status mapping, CORS, and server lifecycle. No decision logic lives
//! here — the router calls into `engine::analyze` and serializes whatever
//! comes back.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::ApiServer;
pub use types::{AnalyzeRequest, ApiContext};
