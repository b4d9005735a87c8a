//! End-to-end tests for the HTTP API
//!
//! Drives the full router, middleware included, without binding a socket.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use forecast_facade::{ForecastError, Forecaster, ForecasterBuilder, Result as ForecastResult};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{app, AppState};
use std::sync::Arc;
use tower::ServiceExt;

fn test_state() -> AppState {
    let forecaster = ForecasterBuilder::new().seed(7).build().unwrap();
    AppState::new(Arc::new(forecaster))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn sample_body() -> Value {
    json!({"data": [1.0, 2.0, 3.0, 4.0, 5.0]})
}

#[tokio::test]
async fn e2e_root_describes_service() {
    let router = app(test_state());
    let (status, body) = send(&router, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["service"], "AI Forecast Service");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn e2e_health_degraded_before_training() {
    let router = app(test_state());
    let (status, body) = send(&router, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn e2e_train_then_health_reports_loaded() {
    let router = app(test_state());

    let (status, body) = send(&router, post_json("/train", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "trained");
    assert_eq!(body["message"], "Model trained with sample data");

    let (status, body) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_loaded"], true);
}

#[tokio::test]
async fn e2e_train_without_body() {
    let router = app(test_state());
    let request = Request::builder()
        .method("POST")
        .uri("/train")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn e2e_predict() {
    let router = app(test_state());
    let (status, body) = send(&router, post_json("/predict", sample_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["prediction"].is_f64());
    assert_eq!(body["confidence"], 0.85);
}

#[tokio::test]
async fn e2e_predict_trains_lazily() {
    let router = app(test_state());
    send(&router, post_json("/predict", sample_body())).await;

    let (_, body) = send(&router, get("/health")).await;
    assert_eq!(body["model_loaded"], true);
}

#[tokio::test]
async fn e2e_predict_depends_on_length_only() {
    let router = app(test_state());
    let (_, a) = send(&router, post_json("/predict", json!({"data": [1.0, 2.0, 3.0]}))).await;
    let (_, b) = send(&router, post_json("/predict", json!({"data": [9.0, 9.0, 9.0]}))).await;
    assert_eq!(a["prediction"], b["prediction"]);
}

#[tokio::test]
async fn e2e_predict_empty_series() {
    let router = app(test_state());
    let (status, body) = send(&router, post_json("/predict", json!({"data": []}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["prediction"].is_f64());
}

#[tokio::test]
async fn e2e_forecast_seven_days() {
    let router = app(test_state());
    let (status, body) = send(&router, post_json("/forecast/7", sample_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 7);
    assert_eq!(body["predictions"].as_array().unwrap().len(), 7);
    assert_eq!(body["confidence"], 0.8);
}

#[tokio::test]
async fn e2e_forecast_clamps_to_thirty_days() {
    let router = app(test_state());
    let (status, body) = send(&router, post_json("/forecast/100", sample_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 30);
    assert_eq!(body["predictions"].as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn e2e_forecast_zero_and_negative_days() {
    let router = app(test_state());

    let (status, body) = send(&router, post_json("/forecast/0", sample_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], 0);
    assert!(body["predictions"].as_array().unwrap().is_empty());

    let (status, body) = send(&router, post_json("/forecast/-3", sample_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days"], -3);
    assert!(body["predictions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn e2e_forecast_first_step_matches_predict() {
    let router = app(test_state());
    let (_, single) = send(&router, post_json("/predict", sample_body())).await;
    let (_, multi) = send(&router, post_json("/forecast/3", sample_body())).await;

    let first = multi["predictions"][0].as_f64().unwrap();
    let prediction = single["prediction"].as_f64().unwrap();
    assert!((first - prediction).abs() < 1e-9);
}

#[tokio::test]
async fn e2e_forecast_rejects_non_integer_days() {
    let router = app(test_state());
    let (status, _) = send(&router, post_json("/forecast/week", sample_body())).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn e2e_predict_rejects_wrong_shape() {
    let router = app(test_state());
    let (status, _) = send(&router, post_json("/predict", json!({"data": "abc"}))).await;
    assert!(status.is_client_error());

    let (status, _) = send(&router, post_json("/predict", json!({"values": [1.0]}))).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn e2e_request_id_generated_and_propagated() {
    let router = app(test_state());

    let response = router.clone().oneshot(get("/")).await.unwrap();
    let generated = response.headers().get("x-request-id");
    assert!(generated.is_some_and(|v| !v.is_empty()));

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "client-supplied-42")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "client-supplied-42");
}

#[tokio::test]
async fn e2e_metrics_reflect_traffic() {
    let router = app(test_state());
    send(&router, post_json("/predict", sample_body())).await;
    send(&router, post_json("/forecast/100", sample_body())).await;
    send(&router, post_json("/train", json!({}))).await;

    let response = router.clone().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(
        "ai_forecast_predictions_total{endpoint=\"predict\",status=\"success\"} 1"
    ));
    assert!(text.contains(
        "ai_forecast_predictions_total{endpoint=\"forecast\",status=\"success\"} 1"
    ));
    assert!(text.contains("ai_forecast_forecasts_total{days=\"30\"} 1"));
    assert!(text.contains("ai_forecast_model_train_total{status=\"success\"} 1"));
    assert!(text.contains("ai_forecast_prediction_duration_seconds_count 1"));
    assert!(text.contains("ai_forecast_forecast_duration_seconds_count 1"));
    assert!(text.contains("ai_forecast_model_ready 1"));
    assert!(text.contains("ai_forecast_active_predictions 0"));
}

/// Forecaster whose every operation fails
struct BrokenForecaster;

impl Forecaster for BrokenForecaster {
    fn is_ready(&self) -> bool {
        false
    }

    fn train(&self) -> ForecastResult<()> {
        Err(ForecastError::NumericalError("singular fit".to_string()))
    }

    fn predict_single(&self, _data: &[f64]) -> ForecastResult<f64> {
        Err(ForecastError::NumericalError("singular fit".to_string()))
    }

    fn forecast_multi(&self, _data: &[f64], _steps: usize) -> ForecastResult<Vec<f64>> {
        Err(ForecastError::NumericalError("singular fit".to_string()))
    }
}

#[tokio::test]
async fn e2e_internal_failure_is_counted_and_returned_as_500() {
    let state = AppState::new(Arc::new(BrokenForecaster));
    let metrics = Arc::clone(&state.metrics);
    let router = app(state);

    let (status, body) = send(&router, post_json("/predict", sample_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Internal Server Error");

    let (status, _) = send(&router, post_json("/forecast/5", sample_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(&router, post_json("/train", json!({}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(metrics.predictions_total.get(&["predict", "error"]), 1.0);
    assert_eq!(metrics.predictions_total.get(&["forecast", "error"]), 1.0);
    assert_eq!(metrics.model_train_total.get(&["error"]), 1.0);
    assert_eq!(metrics.model_train_total.get(&["success"]), 0.0);
    assert_eq!(metrics.prediction_duration.count(), 1);
    assert_eq!(metrics.forecast_duration.count(), 1);
    assert_eq!(metrics.active_predictions.get(), 0.0);
    assert_eq!(metrics.model_ready.get(), 0.0);

    let (status, body) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
}
