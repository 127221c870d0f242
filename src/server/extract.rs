use super::types::ErrorResponse;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON body extractor that reports every rejection (absent body, wrong
/// content-type, malformed JSON, missing fields) as 422 with a `detail`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(validation_error(rejection)),
        }
    }
}

fn validation_error(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    debug!("Rejected request body ({}): {}", rejection.status(), rejection.body_text());

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            detail: rejection.body_text(),
        }),
    )
}
