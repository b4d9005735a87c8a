//! API route handlers

use crate::error::ApiError;
use crate::metrics::{Outcome, CONTENT_TYPE};
use crate::schemas::{
    clamp_days, horizon_steps, ForecastResponse, HealthResponse, PredictRequest,
    PredictResponse, ServiceInfo, TrainResponse, FORECAST_CONFIDENCE, PREDICTION_CONFIDENCE,
};
use crate::telemetry::CorrelationId;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use forecast_facade::ForecastError;

/// Count the outcome, log failures and refresh the readiness gauge.
fn settle<T>(
    state: &AppState,
    endpoint: &'static str,
    request_id: &str,
    result: Result<T, ForecastError>,
) -> Result<T, ApiError> {
    state.metrics.set_model_ready(state.forecaster.is_ready());
    match result {
        Ok(value) => {
            state.metrics.record_prediction(endpoint, Outcome::Success);
            Ok(value)
        }
        Err(err) => {
            state.metrics.record_prediction(endpoint, Outcome::Error);
            tracing::error!(
                request_id = %request_id,
                endpoint,
                error = %err,
                "request failed"
            );
            Err(err.into())
        }
    }
}

pub async fn root(CorrelationId(request_id): CorrelationId) -> Json<ServiceInfo> {
    tracing::info!(request_id = %request_id, endpoint = "root", "service status");
    Json(ServiceInfo::default())
}

pub async fn health(
    State(state): State<AppState>,
    CorrelationId(request_id): CorrelationId,
) -> Json<HealthResponse> {
    let model_loaded = state.forecaster.is_ready();
    state.metrics.set_model_ready(model_loaded);

    tracing::info!(
        request_id = %request_id,
        endpoint = "health",
        model_loaded,
        "health check"
    );
    Json(HealthResponse::from_readiness(model_loaded))
}

pub async fn predict(
    State(state): State<AppState>,
    CorrelationId(request_id): CorrelationId,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let _in_flight = state.metrics.in_flight();
    let _timer = state.metrics.prediction_duration.start_timer();

    tracing::info!(
        request_id = %request_id,
        endpoint = "predict",
        points = request.data.len(),
        "Predicting for {} data points",
        request.data.len()
    );

    let result = state.forecaster.predict_single(&request.data);
    let prediction = settle(&state, "predict", &request_id, result)?;

    Ok(Json(PredictResponse {
        prediction,
        confidence: PREDICTION_CONFIDENCE,
    }))
}

pub async fn forecast(
    State(state): State<AppState>,
    Path(requested): Path<i64>,
    CorrelationId(request_id): CorrelationId,
    Json(request): Json<PredictRequest>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let _in_flight = state.metrics.in_flight();
    let _timer = state.metrics.forecast_duration.start_timer();

    let days = clamp_days(requested);
    state.metrics.record_forecast(days);

    tracing::info!(
        request_id = %request_id,
        endpoint = "forecast",
        requested_days = requested,
        days,
        points = request.data.len(),
        "Forecasting {} days ahead",
        days
    );

    let result = state
        .forecaster
        .forecast_multi(&request.data, horizon_steps(days));
    let predictions = settle(&state, "forecast", &request_id, result)?;

    Ok(Json(ForecastResponse {
        days,
        predictions,
        confidence: FORECAST_CONFIDENCE,
    }))
}

pub async fn train(
    State(state): State<AppState>,
    CorrelationId(request_id): CorrelationId,
) -> Result<Json<TrainResponse>, ApiError> {
    match state.forecaster.train() {
        Ok(()) => {
            state.metrics.record_training(Outcome::Success);
            state.metrics.set_model_ready(true);
            tracing::info!(request_id = %request_id, endpoint = "train", "model retrained");
            Ok(Json(TrainResponse::trained()))
        }
        Err(err) => {
            state.metrics.record_training(Outcome::Error);
            state.metrics.set_model_ready(state.forecaster.is_ready());
            tracing::error!(
                request_id = %request_id,
                endpoint = "train",
                error = %err,
                "training failed"
            );
            Err(err.into())
        }
    }
}

/// Prometheus scrape endpoint
pub async fn metrics(
    State(state): State<AppState>,
    CorrelationId(request_id): CorrelationId,
) -> impl IntoResponse {
    state.metrics.set_model_ready(state.forecaster.is_ready());
    let body = state.metrics.render();

    tracing::info!(
        request_id = %request_id,
        endpoint = "metrics",
        bytes = body.len(),
        "metrics scrape"
    );
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], body)
}
