use crate::{
    model::{Classifier, Features},
    Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const KEYWORD: &str = "good";
pub const POSITIVE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: Label,
    pub confidence: f64,
}

/// Turns raw text into the model's numeric input. Text is taken as-is; the
/// single feature flags the keyword (case-sensitive).
pub fn preprocess(text: &str) -> Features {
    let keyword = if text.contains(KEYWORD) { 1.0 } else { 0.0 };
    Features::new(vec![keyword])
}

/// Ties go to [`Label::Negative`].
pub fn postprocess(confidence: f64) -> Label {
    if confidence > POSITIVE_THRESHOLD {
        Label::Positive
    } else {
        Label::Negative
    }
}

/// Model errors are returned unchanged.
pub fn predict_text(model: &dyn Classifier, text: &str) -> Result<Prediction> {
    let features = preprocess(text);
    let confidence = model.forward(&features)?;
    let label = postprocess(confidence);

    debug!(
        model = model.name(),
        %label,
        confidence,
        "Prediction complete"
    );

    Ok(Prediction { label, confidence })
}
