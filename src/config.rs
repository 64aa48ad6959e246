use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Sintoma";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=debug,info", env!("CARGO_PKG_NAME"))
}

/// Directory holding the trained model artifacts (model.json + meta.json).
/// Overridable via SINTOMA_ARTIFACTS_DIR; defaults to ./artifacts.
pub fn artifacts_dir() -> PathBuf {
    std::env::var_os("SINTOMA_ARTIFACTS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"))
}

/// Default path of the labeled training dataset consumed by the `train` binary.
pub fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/training_cases.json")
}

/// Address the HTTP API binds to.
/// Overridable via SINTOMA_BIND_ADDR; defaults to 127.0.0.1:8000.
pub fn bind_addr() -> SocketAddr {
    std::env::var("SINTOMA_BIND_ADDR")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8000)))
}
