//! One-vs-rest logistic regression trainer.
//!
//! Each condition gets an independent binary logistic model fitted by
//! full-batch gradient descent over the binarized symptom vectors. Weights
//! start at zero, so a training run is fully deterministic for a given
//! dataset and options.

use std::collections::BTreeSet;

use crate::model::classifier::{sigmoid, ConfidenceKind, LinearClassifier};
use crate::model::SymptomModel;

use super::dataset::Dataset;

/// Training hyperparameters.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// Full-batch gradient descent passes per class.
    pub epochs: usize,
    /// Constant learning rate.
    pub learning_rate: f64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            epochs: 300,
            learning_rate: 0.5,
        }
    }
}

/// Fit the classifier and assemble the full model bundle.
pub fn train(dataset: &Dataset, opts: &TrainOptions) -> SymptomModel {
    // Sorted, deduplicated vocabularies fix the feature and class layout.
    let symptom_space: Vec<String> = dataset
        .cases
        .iter()
        .flat_map(|c| c.symptoms.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let classes: Vec<String> = dataset
        .cases
        .iter()
        .map(|c| c.condition.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let features: Vec<Vec<f64>> = dataset
        .cases
        .iter()
        .map(|case| {
            symptom_space
                .iter()
                .map(|slot| {
                    if case.symptoms.iter().any(|s| s == slot) {
                        1.0
                    } else {
                        0.0
                    }
                })
                .collect()
        })
        .collect();

    let mut weights = Vec::with_capacity(classes.len());
    let mut intercepts = Vec::with_capacity(classes.len());
    for class in &classes {
        let targets: Vec<f64> = dataset
            .cases
            .iter()
            .map(|c| if &c.condition == class { 1.0 } else { 0.0 })
            .collect();
        let (w, b) = fit_binary(&features, &targets, opts);
        weights.push(w);
        intercepts.push(b);
    }

    tracing::info!(
        cases = dataset.cases.len(),
        symptoms = symptom_space.len(),
        classes = classes.len(),
        epochs = opts.epochs,
        "Classifier trained"
    );

    SymptomModel {
        classifier: LinearClassifier {
            // Logistic regression natively yields probabilities.
            confidence: ConfidenceKind::Probability,
            weights,
            intercepts,
        },
        symptom_space,
        classes,
        condition_info: dataset.condition_info.clone(),
        trained_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Binary logistic regression by full-batch gradient descent.
fn fit_binary(features: &[Vec<f64>], targets: &[f64], opts: &TrainOptions) -> (Vec<f64>, f64) {
    let n = features.len() as f64;
    let dim = features.first().map(Vec::len).unwrap_or(0);
    let mut w = vec![0.0; dim];
    let mut b = 0.0;

    for _ in 0..opts.epochs {
        let mut grad_w = vec![0.0; dim];
        let mut grad_b = 0.0;
        for (x, y) in features.iter().zip(targets) {
            let margin: f64 = w.iter().zip(x).map(|(wj, xj)| wj * xj).sum::<f64>() + b;
            let err = sigmoid(margin) - y;
            for (gj, xj) in grad_w.iter_mut().zip(x) {
                *gj += err * xj;
            }
            grad_b += err;
        }
        for (wj, gj) in w.iter_mut().zip(&grad_w) {
            *wj -= opts.learning_rate * gj / n;
        }
        b -= opts.learning_rate * grad_b / n;
    }

    (w, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::predictor::{predict, DEFAULT_PROB_THRESHOLD, DEFAULT_TOP_K};
    use crate::training::dataset::{Dataset, LabeledCase};

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn toy_dataset() -> Dataset {
        let mut cases = Vec::new();
        for _ in 0..4 {
            cases.push(LabeledCase {
                symptoms: strings(&["fever", "cough"]),
                condition: "flu".into(),
            });
            cases.push(LabeledCase {
                symptoms: strings(&["headache", "light sensitivity"]),
                condition: "migraine".into(),
            });
        }
        Dataset {
            cases,
            condition_info: Default::default(),
        }
    }

    #[test]
    fn vocabularies_are_sorted_and_deduplicated() {
        let model = train(&toy_dataset(), &TrainOptions::default());
        assert_eq!(
            model.symptom_space,
            strings(&["cough", "fever", "headache", "light sensitivity"])
        );
        assert_eq!(model.classes, strings(&["flu", "migraine"]));
        assert_eq!(model.classifier.class_count(), 2);
        assert_eq!(model.classifier.feature_count(), 4);
    }

    #[test]
    fn separable_classes_rank_correctly() {
        let model = train(&toy_dataset(), &TrainOptions::default());

        let out = predict(
            &model,
            &strings(&["fever", "cough"]),
            DEFAULT_TOP_K,
            DEFAULT_PROB_THRESHOLD,
        );
        assert_eq!(out[0].condition, "flu");

        let out = predict(
            &model,
            &strings(&["headache", "light sensitivity"]),
            DEFAULT_TOP_K,
            DEFAULT_PROB_THRESHOLD,
        );
        assert_eq!(out[0].condition, "migraine");
    }

    #[test]
    fn matching_symptoms_beat_disjoint_symptoms() {
        let model = train(&toy_dataset(), &TrainOptions::default());
        let flu_idx = model.classes.iter().position(|c| c == "flu").unwrap();

        let on_target = model.classifier.confidences(&model.vectorize(&strings(&[
            "fever", "cough",
        ])))[flu_idx];
        let off_target = model.classifier.confidences(&model.vectorize(&strings(&[
            "headache",
            "light sensitivity",
        ])))[flu_idx];
        assert!(on_target > 0.5, "got {on_target}");
        assert!(off_target < 0.5, "got {off_target}");
    }

    #[test]
    fn training_is_deterministic() {
        let a = train(&toy_dataset(), &TrainOptions::default());
        let b = train(&toy_dataset(), &TrainOptions::default());
        assert_eq!(a.classifier.weights, b.classifier.weights);
        assert_eq!(a.classifier.intercepts, b.classifier.intercepts);
    }
}
