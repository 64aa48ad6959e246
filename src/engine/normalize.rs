//! Synonym normalizer: raw symptom tokens → canonical lowercase names.

/// Colloquial Tagalog vocabulary mapped to the canonical English symptom
/// names the model was trained on. Lookup happens after trim/lowercase.
static SYMPTOM_SYNONYMS: &[(&str, &str)] = &[
    ("lagnat", "fever"),
    ("ubo", "cough"),
    ("sipon", "runny nose"),
    ("sakit ng ulo", "headache"),
    ("hirap huminga", "shortness of breath"),
    ("pananakit ng dibdib", "chest pain"),
];

/// Normalize one raw token: trim, lowercase, collapse double spaces,
/// then map through the synonym table. Unknown tokens pass through as-is —
/// the engine only fails later if nothing usable survives.
pub fn normalize_symptom(raw: &str) -> String {
    // Pairwise double-space replacement, not a general whitespace collapse.
    let base = raw.trim().to_lowercase().replace("  ", " ");
    match SYMPTOM_SYNONYMS.iter().find(|(from, _)| *from == base) {
        Some((_, canonical)) => (*canonical).to_string(),
        None => base,
    }
}

/// Normalize a raw symptom list: per-token normalization, empty results
/// dropped, deduplicated preserving first-seen order.
pub fn normalize_list(raw: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for token in raw {
        let n = normalize_symptom(token);
        if !n.is_empty() && !out.contains(&n) {
            out.push(n);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize_symptom("  FeVeR "), "fever");
    }

    #[test]
    fn collapses_double_spaces_pairwise() {
        assert_eq!(normalize_symptom("chest  pain"), "chest pain");
        // Four spaces become two: pairwise replacement, not a full collapse.
        assert_eq!(normalize_symptom("chest    pain"), "chest  pain");
    }

    #[test]
    fn maps_tagalog_synonyms() {
        assert_eq!(normalize_symptom("Lagnat"), "fever");
        assert_eq!(normalize_symptom("sakit ng ulo"), "headache");
        assert_eq!(normalize_symptom("pananakit ng dibdib"), "chest pain");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(normalize_symptom("ringing ears"), "ringing ears");
    }

    #[test]
    fn dedup_preserves_first_seen_order() {
        let out = normalize_list(&strings(&["ubo", "fever", "cough", "FEVER"]));
        assert_eq!(out, strings(&["cough", "fever"]));
    }

    #[test]
    fn blank_tokens_are_dropped() {
        let out = normalize_list(&strings(&["", "   ", "fever"]));
        assert_eq!(out, strings(&["fever"]));
    }

    #[test]
    fn all_blank_input_yields_empty_list() {
        assert!(normalize_list(&strings(&["", "  "])).is_empty());
    }
}
