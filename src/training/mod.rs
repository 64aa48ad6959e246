//! Model training: dataset ingestion and one-vs-rest logistic regression.

pub mod dataset;
pub mod trainer;

use std::path::PathBuf;

use crate::model::ArtifactError;

pub use dataset::{load_dataset, Dataset};
pub use trainer::{train, TrainOptions};

/// Errors from the training pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("dataset not found at {0}")]
    DatasetNotFound(PathBuf),
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no valid rows loaded from dataset")]
    EmptyDataset,
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}
