//! One-vs-rest linear classifier.
//!
//! The trained artifact stores one weight vector and intercept per
//! condition, plus a capability tag describing which confidence channel
//! the model supports. The tag is written at training time and selects
//! the extraction strategy once at load — the per-request path is a
//! single enum match over precomputed margins.

use serde::{Deserialize, Serialize};

/// Which confidence channel the stored classifier supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceKind {
    /// Model is probability-calibrated: the logistic output IS a probability.
    Probability,
    /// Model only exposes a decision margin; map it to (0,1) via the logistic.
    DecisionMargin,
    /// Model only exposes hard binary predictions: 0.5 for positive, 0.0 otherwise.
    HardLabel,
}

/// Per-class linear model: confidence_c = f(w_c · x + b_c).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// Confidence capability of this artifact.
    pub confidence: ConfidenceKind,
    /// One weight row per class, one column per symptom-space slot.
    pub weights: Vec<Vec<f64>>,
    /// One intercept per class.
    pub intercepts: Vec<f64>,
}

impl LinearClassifier {
    pub fn class_count(&self) -> usize {
        self.weights.len()
    }

    pub fn feature_count(&self) -> usize {
        self.weights.first().map(Vec::len).unwrap_or(0)
    }

    /// Raw decision margin for one class.
    fn margin(&self, class_idx: usize, features: &[f64]) -> f64 {
        let row = &self.weights[class_idx];
        let dot: f64 = row.iter().zip(features).map(|(w, x)| w * x).sum();
        dot + self.intercepts[class_idx]
    }

    /// Per-class confidences for a feature vector, in class order.
    ///
    /// `features` must have `feature_count()` entries; the artifact loader
    /// guarantees the shapes line up.
    pub fn confidences(&self, features: &[f64]) -> Vec<f64> {
        (0..self.class_count())
            .map(|c| {
                let margin = self.margin(c, features);
                match self.confidence {
                    ConfidenceKind::Probability => sigmoid(margin),
                    ConfidenceKind::DecisionMargin => sigmoid(margin),
                    ConfidenceKind::HardLabel => {
                        if margin > 0.0 {
                            0.5
                        } else {
                            0.0
                        }
                    }
                }
            })
            .collect()
    }
}

/// Logistic function with the usual numerical-stability split.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let ex = x.exp();
        ex / (1.0 + ex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_class() -> LinearClassifier {
        LinearClassifier {
            confidence: ConfidenceKind::Probability,
            weights: vec![vec![2.0, 0.0], vec![0.0, -3.0]],
            intercepts: vec![0.0, 1.0],
        }
    }

    #[test]
    fn sigmoid_is_symmetric_around_half() {
        assert_eq!(sigmoid(0.0), 0.5);
        let hi = sigmoid(4.2);
        let lo = sigmoid(-4.2);
        assert!((hi + lo - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_stable_at_extremes() {
        assert!(sigmoid(1000.0) <= 1.0);
        assert!(sigmoid(-1000.0) >= 0.0);
    }

    #[test]
    fn probability_confidences_follow_margins() {
        let clf = two_class();
        let conf = clf.confidences(&[1.0, 1.0]);
        // class 0: sigmoid(2.0) > 0.5; class 1: sigmoid(-2.0) < 0.5
        assert!(conf[0] > 0.5);
        assert!(conf[1] < 0.5);
    }

    #[test]
    fn hard_label_confidences_are_binary() {
        let mut clf = two_class();
        clf.confidence = ConfidenceKind::HardLabel;
        let conf = clf.confidences(&[1.0, 1.0]);
        assert_eq!(conf, vec![0.5, 0.0]);
    }

    #[test]
    fn margin_kind_maps_through_logistic() {
        let mut clf = two_class();
        clf.confidence = ConfidenceKind::DecisionMargin;
        let conf = clf.confidences(&[0.0, 0.0]);
        assert_eq!(conf[0], 0.5); // margin 0 → 0.5
        assert!((conf[1] - sigmoid(1.0)).abs() < 1e-12);
    }
}
