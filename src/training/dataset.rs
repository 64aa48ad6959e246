//! Labeled case dataset ingestion.
//!
//! The dataset is a JSON list of cases: a symptom set, a condition label,
//! and optional details/treatment text. Symptom and condition names are
//! trimmed and lowercased on ingest; rows with no usable symptoms or no
//! condition are skipped; the first definition of a condition's info text
//! wins over later duplicates.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::model::ConditionInfo;

use super::TrainingError;

/// One raw dataset row as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingCase {
    pub symptoms: Vec<String>,
    pub condition: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub treatment: String,
}

/// A cleaned row ready for binarization.
#[derive(Debug, Clone)]
pub struct LabeledCase {
    pub symptoms: Vec<String>,
    pub condition: String,
}

/// The ingested dataset: cleaned rows plus the condition-info table.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub cases: Vec<LabeledCase>,
    pub condition_info: HashMap<String, ConditionInfo>,
}

pub fn load_dataset(path: &Path) -> Result<Dataset, TrainingError> {
    if !path.exists() {
        return Err(TrainingError::DatasetNotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    let rows: Vec<TrainingCase> = serde_json::from_str(&raw)?;
    ingest(rows)
}

fn ingest(rows: Vec<TrainingCase>) -> Result<Dataset, TrainingError> {
    let mut cases = Vec::with_capacity(rows.len());
    let mut condition_info: HashMap<String, ConditionInfo> = HashMap::new();

    for row in rows {
        let symptoms: Vec<String> = row
            .symptoms
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        let condition = row.condition.trim().to_lowercase();
        if symptoms.is_empty() || condition.is_empty() {
            continue;
        }

        // First occurrence wins as the canonical info text.
        condition_info.entry(condition.clone()).or_insert_with(|| ConditionInfo {
            details: row.details.trim().to_string(),
            treatment: row.treatment.trim().to_string(),
        });

        cases.push(LabeledCase { symptoms, condition });
    }

    if cases.is_empty() {
        return Err(TrainingError::EmptyDataset);
    }
    Ok(Dataset {
        cases,
        condition_info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(symptoms: &[&str], condition: &str, details: &str) -> TrainingCase {
        TrainingCase {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            condition: condition.to_string(),
            details: details.to_string(),
            treatment: String::new(),
        }
    }

    #[test]
    fn ingest_cleans_and_keeps_valid_rows() {
        let ds = ingest(vec![
            case(&["  Fever ", "COUGH"], " Flu ", "a viral infection"),
            case(&[], "flu", "ignored"),
            case(&["headache"], "", "ignored"),
        ])
        .unwrap();
        assert_eq!(ds.cases.len(), 1);
        assert_eq!(ds.cases[0].symptoms, vec!["fever", "cough"]);
        assert_eq!(ds.cases[0].condition, "flu");
    }

    #[test]
    fn first_condition_definition_wins() {
        let ds = ingest(vec![
            case(&["fever"], "flu", "first definition"),
            case(&["cough"], "flu", "second definition"),
        ])
        .unwrap();
        assert_eq!(ds.condition_info["flu"].details, "first definition");
    }

    #[test]
    fn all_invalid_rows_is_an_error() {
        let err = ingest(vec![case(&[], "flu", ""), case(&["x"], "", "")]).unwrap_err();
        assert!(matches!(err, TrainingError::EmptyDataset));
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let err = load_dataset(Path::new("no/such/dataset.json")).unwrap_err();
        assert!(matches!(err, TrainingError::DatasetNotFound(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.json");
        std::fs::write(&path, "[{broken").unwrap();
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, TrainingError::Parse(_)));
    }
}
