use std::sync::Arc;

use sintoma::api::ApiServer;
use sintoma::core_state::CoreState;
use sintoma::{config, model};

#[tokio::main]
async fn main() {
    sintoma::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    // Artifact load failures are fatal: the process must not serve
    // without a model.
    let artifacts_dir = config::artifacts_dir();
    let loaded = match model::load_artifacts(&artifacts_dir) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(dir = %artifacts_dir.display(), "Failed to load model artifacts: {e}");
            std::process::exit(1);
        }
    };

    let core = Arc::new(CoreState::new());
    if let Err(e) = core.install_model(loaded) {
        tracing::error!("Failed to install model: {e}");
        std::process::exit(1);
    }

    let mut server = match ApiServer::start(core, config::bind_addr()).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start API server: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    server.shutdown();
}
