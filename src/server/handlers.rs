use super::{
    extract::ValidJson,
    types::{ErrorResponse, HealthResponse, PredictionOutput, TextInput},
};
use crate::{inference::predict_text, model::Classifier, Error};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

/// Built once at startup; every request sees the same model.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn Classifier>,
    pub workers: Arc<Semaphore>,
}

impl AppState {
    pub fn new(model: Arc<dyn Classifier>, inference_workers: usize) -> Self {
        Self {
            model,
            workers: Arc::new(Semaphore::new(inference_workers.max(1))),
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn predict(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<TextInput>,
) -> Result<Json<PredictionOutput>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    let span = info_span!("predict", %request_id, model = state.model.name());

    async move {
        info!("Received prediction request ({} bytes)", input.text.len());

        // The permit moves into the blocking task so it is held until the
        // model call returns, even if the client goes away first.
        let permit = match state.workers.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(e) => return Err(inference_failure(Error::internal(e.to_string()))),
        };

        let model = Arc::clone(&state.model);
        let outcome = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            predict_text(model.as_ref(), &input.text)
        })
        .await;

        match outcome {
            Ok(Ok(prediction)) => {
                info!(
                    "Predicted {} with confidence {}",
                    prediction.label, prediction.confidence
                );
                Ok(Json(prediction.into()))
            }
            Ok(Err(e)) => Err(inference_failure(e)),
            Err(e) => Err(inference_failure(Error::internal(format!(
                "inference worker failed: {}",
                e
            )))),
        }
    }
    .instrument(span)
    .await
}

fn inference_failure(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let cause = match err {
        Error::Inference(msg) => msg,
        other => other.to_string(),
    };
    error!("Model inference failed: {}", cause);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: format!("Model inference failed: {}", cause),
        }),
    )
}
