//! Red-flag rule engine.
//!
//! A fixed set of safety rules evaluated against the normalized symptom
//! list. Every matching rule contributes its message (declaration order);
//! matched severities fold into a floor where high is terminal and medium
//! never downgrades. The rules fire on the INPUT symptoms, independent of
//! whatever the classifier predicts — safety does not defer to the model.

use super::severity::Severity;

/// A hard-coded safety rule.
struct RedFlagRule {
    /// Unique identifier for the log trail.
    id: &'static str,
    /// Matches when at least one of these symptoms is present.
    any_of: &'static [&'static str],
    /// Matches when every one of these symptoms is present.
    all_of: &'static [&'static str],
    /// Warning surfaced to the caller.
    message: &'static str,
    /// Severity floor contribution. Rules only carry medium or high.
    severity: Severity,
}

static RED_FLAG_RULES: &[RedFlagRule] = &[
    RedFlagRule {
        id: "cardiac",
        any_of: &["chest pain", "shortness of breath", "sweating"],
        all_of: &[],
        message: "Possible cardiac concern. Seek urgent medical evaluation.",
        severity: Severity::High,
    },
    RedFlagRule {
        id: "meningitis_like",
        any_of: &[],
        all_of: &["stiff neck", "fever", "headache"],
        message: "Combination may indicate serious infection. Get medical attention.",
        severity: Severity::High,
    },
    RedFlagRule {
        id: "respiratory",
        any_of: &[],
        all_of: &["wheezing", "shortness of breath"],
        message: "Breathing difficulty. Monitor closely; seek care if worsening.",
        severity: Severity::Medium,
    },
];

impl RedFlagRule {
    fn matches(&self, symptoms: &[String]) -> bool {
        let any_ok = !self.any_of.is_empty()
            && self.any_of.iter().any(|s| symptoms.iter().any(|x| x == s));
        let all_ok = !self.all_of.is_empty()
            && self.all_of.iter().all(|s| symptoms.iter().any(|x| x == s));
        any_ok || all_ok
    }
}

/// Evaluate every rule against the canonical symptom list.
///
/// Returns the triggered messages in rule-declaration order and the folded
/// severity floor (`None` when nothing matched).
pub fn evaluate(symptoms: &[String]) -> (Vec<String>, Option<Severity>) {
    let mut triggered = Vec::new();
    let mut floor: Option<Severity> = None;

    for rule in RED_FLAG_RULES {
        if rule.matches(symptoms) {
            tracing::warn!(rule_id = rule.id, severity = ?rule.severity, "Red-flag rule fired");
            triggered.push(rule.message.to_string());
            floor = Some(floor.map_or(rule.severity, |f| f.max(rule.severity)));
        }
    }

    (triggered, floor)
}
