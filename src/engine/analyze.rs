//! Top-level analysis pipeline and response assembly.
//!
//! Flow: validate → normalize → {red flags, predictor} → reduce → assemble.
//! Everything here is synchronous and CPU-bound; the only shared state is
//! the immutable model bundle borrowed from `CoreState` for the duration
//! of one request.

use std::collections::HashMap;

use serde::Serialize;

use crate::core_state::{CoreError, CoreState};
use crate::model::SymptomModel;

use super::normalize;
use super::predictor::{self, Prediction, DEFAULT_PROB_THRESHOLD, DEFAULT_TOP_K};
use super::red_flags;
use super::severity::{self, AccuracyLevel, Severity};

/// Request-level failures of the analysis contract.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("at least one symptom is required")]
    EmptyInput,
    #[error("supplied symptoms are not recognized")]
    UnrecognizedSymptoms,
    #[error("model not loaded; artifacts must be loaded before analysis")]
    ModelNotLoaded,
    #[error("model state lock poisoned")]
    LockPoisoned,
}

impl From<CoreError> for AnalysisError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LockPoisoned => AnalysisError::LockPoisoned,
        }
    }
}

/// The assembled assessment, serialized as-is by the HTTP layer.
///
/// Optional fields are tri-state by construction: a populated value, or an
/// explicit `null` — never an empty string or empty map standing in for
/// "nothing to show".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub severity: Severity,
    pub insights: Vec<String>,
    pub advice: String,
    pub red_flags: Vec<String>,
    pub probabilities: Option<HashMap<String, f64>>,
    pub top_condition: Option<String>,
    pub condition_details: Option<String>,
    pub treatment: Option<String>,
    pub accuracy_level: AccuracyLevel,
}

/// Fixed human-readable guidance per final severity.
fn advice_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "Rest, hydrate, and monitor for 24\u{2013}48 hours.",
        Severity::Medium => {
            "Monitor and consult a healthcare professional if symptoms persist or worsen."
        }
        Severity::High => "Seek urgent medical attention immediately.",
    }
}

/// Run the full pipeline for one request.
pub fn analyze(core: &CoreState, raw_symptoms: &[String]) -> Result<AnalysisResult, AnalysisError> {
    if raw_symptoms.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let symptoms = normalize::normalize_list(raw_symptoms);
    if symptoms.is_empty() {
        return Err(AnalysisError::UnrecognizedSymptoms);
    }
    tracing::debug!(?symptoms, "Symptoms normalized");

    let (red_flags, red_flag_floor) = red_flags::evaluate(&symptoms);

    let guard = core.read_model()?;
    let model = guard.as_ref().ok_or(AnalysisError::ModelNotLoaded)?;
    let predictions = predictor::predict(model, &symptoms, DEFAULT_TOP_K, DEFAULT_PROB_THRESHOLD);

    let result = assemble(model, predictions, red_flags, red_flag_floor);
    tracing::info!(
        severity = ?result.severity,
        insights = result.insights.len(),
        red_flags = result.red_flags.len(),
        "Analysis complete"
    );
    Ok(result)
}

/// Join predictor output, rule output, the reduced severity, and the static
/// knowledge tables into the final result.
fn assemble(
    model: &SymptomModel,
    predictions: Vec<Prediction>,
    red_flags: Vec<String>,
    red_flag_floor: Option<Severity>,
) -> AnalysisResult {
    let insights: Vec<String> = predictions.iter().map(|p| p.condition.clone()).collect();
    let final_severity = severity::reduce(&insights, red_flag_floor);

    let probabilities = if predictions.is_empty() {
        None
    } else {
        Some(
            predictions
                .iter()
                .map(|p| (p.condition.clone(), p.confidence))
                .collect(),
        )
    };

    let top_confidence = predictions.first().map(|p| p.confidence).unwrap_or(0.0);
    let top_condition = insights.first().cloned();

    let info = top_condition
        .as_deref()
        .and_then(|c| model.condition_info(c));
    let condition_details = info
        .map(|i| i.details.clone())
        .filter(|d| !d.is_empty());
    let treatment = info
        .map(|i| i.treatment.clone())
        .filter(|t| !t.is_empty());

    AnalysisResult {
        severity: final_severity,
        advice: advice_for(final_severity).to_string(),
        insights,
        red_flags,
        probabilities,
        top_condition,
        condition_details,
        treatment,
        accuracy_level: severity::accuracy_for(top_confidence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_model;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn loaded_core() -> CoreState {
        let core = CoreState::new();
        core.install_model(test_model()).unwrap();
        core
    }

    #[test]
    fn empty_input_is_rejected() {
        let core = loaded_core();
        assert!(matches!(
            analyze(&core, &[]),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn blank_only_input_is_unrecognized() {
        let core = loaded_core();
        assert!(matches!(
            analyze(&core, &strings(&[""])),
            Err(AnalysisError::UnrecognizedSymptoms)
        ));
    }

    #[test]
    fn unloaded_model_fails_fast() {
        let core = CoreState::new();
        assert!(matches!(
            analyze(&core, &strings(&["fever"])),
            Err(AnalysisError::ModelNotLoaded)
        ));
    }

    #[test]
    fn flu_scenario_medium_high_accuracy() {
        let core = loaded_core();
        let result = analyze(&core, &strings(&["fever", "cough"])).unwrap();

        assert_eq!(result.severity, Severity::Medium);
        assert_eq!(result.top_condition.as_deref(), Some("flu"));
        assert_eq!(result.accuracy_level, AccuracyLevel::High);
        assert!(result.red_flags.is_empty());
        assert_eq!(result.insights[0], "flu");
        assert_eq!(
            result.advice,
            "Monitor and consult a healthcare professional if symptoms persist or worsen."
        );
        let probs = result.probabilities.expect("predictions imply probabilities");
        assert!(probs["flu"] > 0.5);
        // Condition info came from the metadata bundle.
        assert_eq!(
            result.condition_details.as_deref(),
            Some("Viral infection of the airways.")
        );
        assert_eq!(result.treatment.as_deref(), Some("Rest and fluids."));
    }

    #[test]
    fn cardiac_red_flag_forces_high() {
        let core = loaded_core();
        // "sweating" is outside the toy model's symptom space — no strong
        // prediction — but the cardiac any-of rule still floors severity.
        let result = analyze(&core, &strings(&["sweating"])).unwrap();
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.red_flags.len(), 1);
        assert_eq!(result.advice, "Seek urgent medical attention immediately.");
    }

    #[test]
    fn tagalog_input_reaches_the_model() {
        let core = loaded_core();
        let result = analyze(&core, &strings(&["lagnat", "ubo"])).unwrap();
        assert_eq!(result.top_condition.as_deref(), Some("flu"));
    }

    #[test]
    fn conditions_without_info_leave_details_absent() {
        let core = loaded_core();
        let result = analyze(&core, &strings(&["headache"])).unwrap();
        assert_eq!(result.top_condition.as_deref(), Some("migraine"));
        assert!(result.condition_details.is_none());
        assert!(result.treatment.is_none());
    }

    #[test]
    fn fallback_predictions_still_yield_insights() {
        let core = loaded_core();
        let result = analyze(&core, &strings(&["completely unknown"])).unwrap();
        assert!(!result.insights.is_empty());
        assert_eq!(result.accuracy_level, AccuracyLevel::Low);
        assert!(result.probabilities.is_some());
    }

    #[test]
    fn serialized_result_uses_camel_case_and_nulls() {
        let core = loaded_core();
        let result = analyze(&core, &strings(&["headache"])).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["severity"], "medium");
        assert!(json["redFlags"].is_array());
        assert_eq!(json["topCondition"], "migraine");
        assert!(json["conditionDetails"].is_null());
        assert!(json["treatment"].is_null());
        assert_eq!(json["accuracyLevel"], "High");
    }
}
