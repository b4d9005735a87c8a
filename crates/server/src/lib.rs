//! # server
//!
//! REST API of the AI Forecast Service. Translates HTTP requests into
//! [`Forecaster`] calls, records metrics and emits one structured log
//! record per request, correlated by `x-request-id`.

use axum::{
    routing::{get, post},
    Router,
};
use forecast_facade::Forecaster;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod schemas;
pub mod telemetry;

use metrics::ServiceMetrics;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub forecaster: Arc<dyn Forecaster>,
    pub metrics: Arc<ServiceMetrics>,
}

impl AppState {
    pub fn new(forecaster: Arc<dyn Forecaster>) -> Self {
        let metrics = ServiceMetrics::new();
        metrics.set_model_ready(forecaster.is_ready());
        Self {
            forecaster,
            metrics: Arc::new(metrics),
        }
    }
}

/// Build the router with all routes and middleware
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Layers wrap outward: the request id is set before the trace span
    // opens and copied onto the response last.
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/predict", post(routes::predict))
        .route("/forecast/:days", post(routes::forecast))
        .route("/train", post(routes::train))
        .route("/metrics", get(routes::metrics))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(telemetry::make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}
