//! API error type and its HTTP rendering

use crate::schemas::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forecast_facade::ForecastError;
use thiserror::Error;

/// Failures surfaced by request handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unexpected failure inside the forecasting engine
    #[error("forecasting engine failed: {0}")]
    Forecast(#[from] ForecastError),
}

impl IntoResponse for ApiError {
    // Internal detail stays in the logs; clients get a generic 500.
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: "Internal Server Error".to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
