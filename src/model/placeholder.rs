use super::types::{Classifier, Features};
use crate::Result;

pub const POSITIVE_CONFIDENCE: f64 = 0.95;
pub const NEGATIVE_CONFIDENCE: f64 = 0.45;

/// Stand-in used outside production: no weights, no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for KeywordClassifier {
    fn name(&self) -> &'static str {
        "keyword-placeholder"
    }

    fn forward(&self, features: &Features) -> Result<f64> {
        let keyword_present = features.values().first().is_some_and(|v| *v > 0.5);
        if keyword_present {
            Ok(POSITIVE_CONFIDENCE)
        } else {
            Ok(NEGATIVE_CONFIDENCE)
        }
    }
}
