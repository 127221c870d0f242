mod extract;
pub mod handlers;
mod types;

pub use extract::ValidJson;
pub use handlers::AppState;
pub use types::*;

use crate::{
    config::{Config, ServerConfig},
    model::load_model,
    Error, Result,
};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        // Published route name; `/predict` is accepted as well.
        .route("/predicy", post(handlers::predict))
        .route("/predict", post(handlers::predict))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Load the model exactly once, before accepting connections
    let model_config = config.model.clone();
    let model = tokio::task::spawn_blocking(move || {
        load_model(&model_config.path, None, model_config.env)
    })
    .await
    .map_err(|e| Error::internal(format!("Model loader failed: {}", e)))??;

    let app_state = AppState::new(model, config.server.inference_workers);
    let app = router(app_state);

    let listener = bind(&config.server).await?;

    info!(
        "Starting server on {} ({} mode, {} inference workers)",
        listener.local_addr()?,
        config.model.env,
        config.server.inference_workers
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Binds `host:port`; `host` may be an IP literal or a resolvable name.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port))
        .await
        .map_err(|e| {
            Error::config(format!(
                "Failed to bind {}:{}: {}",
                server.host, server.port, e
            ))
        })
}
