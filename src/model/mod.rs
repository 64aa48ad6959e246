//! Trained model bundle: classifier, vocabularies, and condition info.

pub mod artifacts;
pub mod classifier;

use std::collections::HashMap;

pub use artifacts::{load_artifacts, save_artifacts, ArtifactError, ConditionInfo};
pub use classifier::{ConfidenceKind, LinearClassifier};

/// The immutable model bundle assembled from the two artifacts.
///
/// Owned by `CoreState` after load; never mutated. The symptom space is
/// ordered and defines the feature vector layout — slot i is 1.0 when the
/// i-th canonical symptom is present in the request.
#[derive(Debug, Clone)]
pub struct SymptomModel {
    pub classifier: LinearClassifier,
    pub symptom_space: Vec<String>,
    pub classes: Vec<String>,
    pub condition_info: HashMap<String, ConditionInfo>,
    pub trained_at: String,
}

impl SymptomModel {
    /// Binary feature vector over the trained symptom space.
    ///
    /// Symptoms outside the space have no slot and are silently ignored.
    pub fn vectorize(&self, symptoms: &[String]) -> Vec<f64> {
        self.symptom_space
            .iter()
            .map(|slot| {
                if symptoms.iter().any(|s| s == slot) {
                    1.0
                } else {
                    0.0
                }
            })
            .collect()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Advisory text for a condition, if any was recorded during training.
    pub fn condition_info(&self, condition: &str) -> Option<&ConditionInfo> {
        self.condition_info.get(condition)
    }
}

/// Small deterministic model used across unit tests: three conditions with
/// disjoint tell-tale symptoms and well-separated confidences.
#[cfg(test)]
pub fn test_model() -> SymptomModel {
    let symptom_space = vec![
        "chest pain".to_string(),
        "cough".to_string(),
        "fever".to_string(),
        "headache".to_string(),
    ];
    let classes = vec![
        "cardiac_issue".to_string(),
        "flu".to_string(),
        "migraine".to_string(),
    ];
    let classifier = LinearClassifier {
        confidence: ConfidenceKind::Probability,
        // Rows follow class order; columns follow symptom-space order.
        weights: vec![
            vec![6.0, 0.0, 0.0, 0.0], // cardiac_issue ← chest pain
            vec![0.0, 3.0, 3.0, 0.0], // flu ← cough + fever
            vec![0.0, 0.0, 0.0, 5.0], // migraine ← headache
        ],
        intercepts: vec![-3.0, -4.0, -4.0],
    };
    let mut condition_info = HashMap::new();
    condition_info.insert(
        "flu".to_string(),
        ConditionInfo {
            details: "Viral infection of the airways.".to_string(),
            treatment: "Rest and fluids.".to_string(),
        },
    );
    SymptomModel {
        classifier,
        symptom_space,
        classes,
        condition_info,
        trained_at: "2026-01-01T00:00:00Z".to_string(),
    }
}
