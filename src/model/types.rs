use crate::Result;

/// Numeric input to a [`Classifier`]. Raw text never crosses the model
/// boundary; `inference::preprocess` produces these.
#[derive(Debug, Clone, PartialEq)]
pub struct Features(Vec<f32>);

impl Features {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f32] {
        &self.0
    }
}

/// A loaded model. Implementations are immutable after construction and
/// shared across request handlers.
pub trait Classifier: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns a confidence in `[0, 1]`.
    fn forward(&self, features: &Features) -> Result<f64>;
}
