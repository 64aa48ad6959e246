//! Artifact store: persistence and loading of the trained model bundle.
//!
//! Two JSON files live in the artifacts directory:
//! - `model.json` — the `LinearClassifier` (weights, intercepts, capability tag)
//! - `meta.json`  — symptom space, class vocabulary, condition info, timestamp
//!
//! Loading is a one-time startup step. A missing file is `Missing`; a file
//! that fails to read, parse, or shape-check is `Corrupt`. Both are fatal —
//! the process must not serve without a loaded model.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::classifier::LinearClassifier;
use super::SymptomModel;

pub const MODEL_FILE: &str = "model.json";
pub const META_FILE: &str = "meta.json";

/// Errors from locating, reading, or writing the artifact bundles.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("model artifacts missing at {0}; run the `train` binary first")]
    Missing(PathBuf),
    #[error("model artifacts corrupt: {0}")]
    Corrupt(String),
    #[error("failed to write model artifacts: {0}")]
    Write(#[from] std::io::Error),
}

/// On-disk form of `meta.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaArtifact {
    /// Ordered symptom space — defines the feature vector layout.
    pub symptoms: Vec<String>,
    /// Ordered class vocabulary — defines classifier row order.
    pub classes: Vec<String>,
    /// Per-condition advisory text, keyed by class name.
    #[serde(default)]
    pub condition_info: HashMap<String, ConditionInfo>,
    /// RFC 3339 timestamp of the training run.
    pub trained_at: String,
}

/// Static per-condition guidance text recorded during training ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionInfo {
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub treatment: String,
}

/// Load and shape-check the artifact bundle from `dir`.
pub fn load_artifacts(dir: &Path) -> Result<SymptomModel, ArtifactError> {
    let model_path = dir.join(MODEL_FILE);
    let meta_path = dir.join(META_FILE);

    if !model_path.exists() || !meta_path.exists() {
        return Err(ArtifactError::Missing(dir.to_path_buf()));
    }

    let classifier: LinearClassifier = read_json(&model_path)?;
    let meta: MetaArtifact = read_json(&meta_path)?;

    validate(&classifier, &meta)?;

    tracing::info!(
        classes = meta.classes.len(),
        symptoms = meta.symptoms.len(),
        trained_at = %meta.trained_at,
        "Model artifacts loaded"
    );

    Ok(SymptomModel {
        classifier,
        symptom_space: meta.symptoms,
        classes: meta.classes,
        condition_info: meta.condition_info,
        trained_at: meta.trained_at,
    })
}

/// Write both artifact files for a model bundle. Used by the trainer.
pub fn save_artifacts(dir: &Path, model: &SymptomModel) -> Result<(), ArtifactError> {
    std::fs::create_dir_all(dir)?;

    let meta = MetaArtifact {
        symptoms: model.symptom_space.clone(),
        classes: model.classes.clone(),
        condition_info: model.condition_info.clone(),
        trained_at: model.trained_at.clone(),
    };

    write_json(&dir.join(MODEL_FILE), &model.classifier)?;
    write_json(&dir.join(META_FILE), &meta)?;
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ArtifactError::Corrupt(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| ArtifactError::Corrupt(format!("{}: {e}", path.display())))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ArtifactError> {
    let raw = serde_json::to_string_pretty(value)
        .map_err(|e| ArtifactError::Corrupt(format!("{}: {e}", path.display())))?;
    std::fs::write(path, raw)?;
    Ok(())
}

/// Cross-check the two bundles: every classifier row must line up with the
/// metadata vocabularies, or predictions would silently misattribute labels.
fn validate(classifier: &LinearClassifier, meta: &MetaArtifact) -> Result<(), ArtifactError> {
    if meta.classes.is_empty() {
        return Err(ArtifactError::Corrupt("empty class vocabulary".into()));
    }
    if classifier.class_count() != meta.classes.len() {
        return Err(ArtifactError::Corrupt(format!(
            "classifier has {} weight rows for {} classes",
            classifier.class_count(),
            meta.classes.len()
        )));
    }
    if classifier.intercepts.len() != meta.classes.len() {
        return Err(ArtifactError::Corrupt(format!(
            "classifier has {} intercepts for {} classes",
            classifier.intercepts.len(),
            meta.classes.len()
        )));
    }
    if let Some(row) = classifier
        .weights
        .iter()
        .find(|row| row.len() != meta.symptoms.len())
    {
        return Err(ArtifactError::Corrupt(format!(
            "weight row of length {} does not match symptom space of {}",
            row.len(),
            meta.symptoms.len()
        )));
    }
    Ok(())
}
