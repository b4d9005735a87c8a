//! Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

/// Name reported by `GET /`
pub const SERVICE_NAME: &str = "AI Forecast Service";

/// Fixed confidence attached to single predictions
pub const PREDICTION_CONFIDENCE: f64 = 0.85;

/// Fixed confidence attached to multi-step forecasts
pub const FORECAST_CONFIDENCE: f64 = 0.80;

/// Largest horizon served by `POST /forecast/{days}`
pub const MAX_FORECAST_DAYS: i64 = 30;

/// Caller-supplied series; only its length feeds the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Horizon after clamping
    pub days: i64,
    pub predictions: Vec<f64>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "running".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub model_loaded: bool,
}

impl HealthResponse {
    pub fn from_readiness(model_loaded: bool) -> Self {
        let status = if model_loaded {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };
        Self {
            status,
            model_loaded,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainResponse {
    pub status: String,
    pub message: String,
}

impl TrainResponse {
    pub fn trained() -> Self {
        Self {
            status: "trained".to_string(),
            message: "Model trained with sample data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Cap the requested horizon at [`MAX_FORECAST_DAYS`]. No lower bound is
/// applied.
pub fn clamp_days(days: i64) -> i64 {
    days.min(MAX_FORECAST_DAYS)
}

/// Number of steps to forecast for a clamped horizon; non-positive
/// horizons forecast nothing
pub fn horizon_steps(days: i64) -> usize {
    usize::try_from(days).unwrap_or(0)
}
