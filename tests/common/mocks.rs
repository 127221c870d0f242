use text_classifier::{
    Error, Result,
    model::{Classifier, Features},
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock classifier returning a fixed confidence and counting calls
#[derive(Debug)]
pub struct MockClassifier {
    pub confidence: f64,
    pub calls: Arc<AtomicUsize>,
    pub error: Option<String>,
}

impl MockClassifier {
    pub fn new(confidence: f64) -> Self {
        Self {
            confidence,
            calls: Arc::new(AtomicUsize::new(0)),
            error: None,
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for MockClassifier {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn forward(&self, _features: &Features) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.confidence)
    }
}

/// Classifier whose forward pass panics, standing in for a crashed worker
#[derive(Debug, Default)]
pub struct PanickingClassifier;

impl Classifier for PanickingClassifier {
    fn name(&self) -> &'static str {
        "panicking"
    }

    fn forward(&self, _features: &Features) -> Result<f64> {
        panic!("forward pass exploded");
    }
}
