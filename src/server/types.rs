use crate::inference::{Label, Prediction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TextInput {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictionOutput {
    pub label: Label,
    pub confidence: f64,
}

impl From<Prediction> for PredictionOutput {
    fn from(prediction: Prediction) -> Self {
        Self {
            label: prediction.label,
            confidence: prediction.confidence,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
