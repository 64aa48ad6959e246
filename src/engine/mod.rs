//! Symptom analysis decision engine.
//!
//! Pipeline: raw symptoms → normalizer → {predictor, red-flag rules} →
//! severity/accuracy reduction → assembled `AnalysisResult`.

pub mod analyze;
pub mod normalize;
pub mod predictor;
pub mod red_flags;
pub mod severity;

pub use analyze::{analyze, AnalysisError, AnalysisResult};
pub use predictor::{Prediction, DEFAULT_PROB_THRESHOLD, DEFAULT_TOP_K};
pub use severity::{AccuracyLevel, Severity};
