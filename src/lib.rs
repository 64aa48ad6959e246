pub mod api;
pub mod config;
pub mod core_state;
pub mod engine;
pub mod model;
pub mod training;

use tracing_subscriber::EnvFilter;

/// Initialize tracing once, honoring RUST_LOG when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
