//! Trainer entry point: dataset → fitted classifier → artifact bundle.
//!
//! Usage: train [dataset.json] [artifacts_dir]

use std::path::PathBuf;

use sintoma::model::save_artifacts;
use sintoma::training::{load_dataset, train, TrainOptions, TrainingError};
use sintoma::config;

fn main() {
    sintoma::init_tracing();
    if let Err(e) = run() {
        tracing::error!("Training failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), TrainingError> {
    let mut args = std::env::args().skip(1);
    let dataset_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(config::default_dataset_path);
    let artifacts_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(config::artifacts_dir);

    let dataset = load_dataset(&dataset_path)?;
    let model = train(&dataset, &TrainOptions::default());
    save_artifacts(&artifacts_dir, &model)?;

    tracing::info!(
        dir = %artifacts_dir.display(),
        symptoms = model.symptom_space.len(),
        classes = model.classes.len(),
        conditions_with_info = model.condition_info.len(),
        "Model trained and artifacts saved"
    );
    Ok(())
}
