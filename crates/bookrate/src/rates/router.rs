use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::error;

use super::domain::RateRequest;
use super::engine;
use super::validation::{self, RateError};

/// Router exposing the rate calculation endpoint and the health probe.
pub fn rates_router() -> Router {
    Router::new()
        .route("/api/calculate-rate", post(calculate_handler))
        .route("/health", get(healthcheck))
}

pub(crate) async fn calculate_handler(
    payload: Result<Json<RateRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        // A body serde cannot shape violates the same contract as missing
        // fields, so it gets the same message.
        return rate_error_response(RateError::InvalidInput);
    };

    match validation::validate(request).and_then(|valid| engine::calculate(&valid)) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => rate_error_response(err),
    }
}

fn rate_error_response(err: RateError) -> Response {
    match err {
        RateError::NonFinite => {
            // Operators get the detail; the caller only sees the generic body.
            error!("rate calculation failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
        rejection => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": rejection.to_string() })),
        )
            .into_response(),
    }
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "message": "Hotel booking calculator API is running",
    }))
}
