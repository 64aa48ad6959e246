//! Condition predictor: canonical symptoms → ranked (condition, confidence).

use crate::model::SymptomModel;

pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_PROB_THRESHOLD: f64 = 0.15;

/// One ranked classifier output.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub condition: String,
    pub confidence: f64,
}

/// Rank all classes for the given symptoms.
///
/// Pairs are sorted descending by confidence (stable — equal confidences
/// keep class-vocabulary order), filtered to `prob_threshold`, and
/// truncated to `top_k`. If the filter eliminates everything, the first
/// `top_k` pairs by raw rank are returned instead so at least one insight
/// is surfaced whenever the classifier has any vocabulary at all.
pub fn predict(
    model: &SymptomModel,
    symptoms: &[String],
    top_k: usize,
    prob_threshold: f64,
) -> Vec<Prediction> {
    let features = model.vectorize(symptoms);
    let confidences = model.classifier.confidences(&features);

    let mut pairs: Vec<Prediction> = model
        .classes
        .iter()
        .zip(confidences)
        .map(|(condition, confidence)| Prediction {
            condition: condition.clone(),
            confidence,
        })
        .collect();
    pairs.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let filtered: Vec<Prediction> = pairs
        .iter()
        .filter(|p| p.confidence >= prob_threshold)
        .take(top_k)
        .cloned()
        .collect();

    if filtered.is_empty() && !pairs.is_empty() {
        pairs.truncate(top_k);
        return pairs;
    }
    filtered
}
