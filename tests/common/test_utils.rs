use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use candle_core::Device;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use text_classifier::{
    config::{Config, RunMode},
    model::{Classifier, KeywordClassifier, LinearClassifier},
    server::{AppState, router},
};

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.server.logs.level = "debug".to_string();
    config.model.env = RunMode::Development;
    config
}

/// Router backed by the placeholder model
pub fn create_test_app() -> Router {
    create_test_app_with(Arc::new(KeywordClassifier::new()))
}

pub fn create_test_app_with(model: Arc<dyn Classifier>) -> Router {
    router(AppState::new(model, 4))
}

/// Write a linear model's parameters into a fresh temp dir
pub fn write_model_file(weight: f32, bias: f32) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("model.safetensors");
    LinearClassifier::from_parameters(weight, bias, &Device::Cpu)
        .expect("Failed to build model")
        .save(&path)
        .expect("Failed to save model");
    (temp_dir, path)
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
