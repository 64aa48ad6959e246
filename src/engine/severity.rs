//! Severity ordering, the condition→severity table, and the reducers.

use serde::{Deserialize, Serialize};

/// Overall assessment severity. The derived `Ord` (low < medium < high) is
/// load-bearing: every merge in the engine is a max over this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Advisory qualifier for the classifier's own certainty. Derived from the
/// top-ranked confidence only — it says nothing about severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccuracyLevel {
    Low,
    Moderate,
    High,
}

/// Intrinsic severity per condition. Conditions absent from this table
/// contribute nothing to the reduction.
static CONDITION_SEVERITY: &[(&str, Severity)] = &[
    ("flu", Severity::Medium),
    ("meningitis", Severity::High),
    ("migraine", Severity::Medium),
    ("asthma", Severity::Medium),
    ("cardiac_issue", Severity::High),
    ("food_poisoning", Severity::Medium),
    ("dehydration", Severity::Medium),
];

pub fn condition_severity(condition: &str) -> Option<Severity> {
    CONDITION_SEVERITY
        .iter()
        .find(|(name, _)| *name == condition)
        .map(|(_, sev)| *sev)
}

/// Fold predicted conditions' intrinsic severities and the red-flag floor
/// into one final severity. Pure max — iteration order does not matter.
pub fn reduce(predicted_conditions: &[String], red_flag_floor: Option<Severity>) -> Severity {
    let mut severity = predicted_conditions
        .iter()
        .filter_map(|c| condition_severity(c))
        .fold(Severity::Low, Severity::max);
    if let Some(floor) = red_flag_floor {
        severity = severity.max(floor);
    }
    severity
}

/// Map top-condition confidence to the coarse accuracy qualifier.
/// No prediction at all is treated as confidence 0.0.
pub fn accuracy_for(top_confidence: f64) -> AccuracyLevel {
    if top_confidence >= 0.5 {
        AccuracyLevel::High
    } else if top_confidence >= 0.2 {
        AccuracyLevel::Moderate
    } else {
        AccuracyLevel::Low
    }
}
