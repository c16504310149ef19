//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use tasa_types::{AppError, ConvertRequest, RateResponse, RateSource};

use crate::RateService;

/// Application state shared across handlers.
pub struct AppState<S: RateSource> {
    pub service: RateService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // The user gets one generic message regardless of which step of
            // the fetch failed; the reason is in the logs.
            AppError::Unavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "The BCV rate is not available right now. Please try again later.".to_string(),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Current USD/VES rate.
#[tracing::instrument(skip(state))]
pub async fn get_rate<S: RateSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let cached = state.service.current_rate().await?;

    Ok(Json(RateResponse {
        rate: cached.rate,
        formatted_rate: state.service.format().format(cached.rate),
        fetched_at: cached.fetched_at.to_rfc3339(),
    }))
}

/// Convert an amount between USD and VES.
#[tracing::instrument(skip(state), fields(direction = ?req.direction))]
pub async fn convert<S: RateSource>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<ConvertRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.service.convert(req).await?;
    Ok(Json(result))
}
