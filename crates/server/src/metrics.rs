//! Service metrics with Prometheus text exposition
//!
//! Counters, gauges and histograms are plain thread-safe cells rendered on
//! demand by `GET /metrics`.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Upper bounds (seconds) of the duration histograms
pub const DURATION_BUCKETS: [f64; 8] = [0.01, 0.05, 0.1, 0.5, 1.0, 2.5, 5.0, 10.0];

/// Content type of the Prometheus text format
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

// A panicking writer cannot leave a metric half-updated, so poisoned
// cells are read through.
fn lock<T>(cell: &Mutex<T>) -> MutexGuard<'_, T> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}

fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn write_header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

/// Outcome label of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Error => "error",
        }
    }
}

/// Monotonic counter, optionally split by label values
#[derive(Debug)]
pub struct Counter {
    name: &'static str,
    help: &'static str,
    label_names: &'static [&'static str],
    values: Mutex<BTreeMap<Vec<String>, f64>>,
}

impl Counter {
    pub fn new(
        name: &'static str,
        help: &'static str,
        label_names: &'static [&'static str],
    ) -> Self {
        let mut values = BTreeMap::new();
        if label_names.is_empty() {
            values.insert(Vec::new(), 0.0);
        }
        Self {
            name,
            help,
            label_names,
            values: Mutex::new(values),
        }
    }

    /// Increment the series identified by `label_values` (in label order)
    pub fn inc(&self, label_values: &[&str]) {
        let key = label_values.iter().map(|v| v.to_string()).collect();
        *lock(&self.values).entry(key).or_insert(0.0) += 1.0;
    }

    pub fn get(&self, label_values: &[&str]) -> f64 {
        let key: Vec<String> = label_values.iter().map(|v| v.to_string()).collect();
        lock(&self.values).get(&key).copied().unwrap_or(0.0)
    }

    fn render(&self, out: &mut String) {
        write_header(out, self.name, self.help, "counter");
        for (values, count) in lock(&self.values).iter() {
            if values.is_empty() {
                let _ = writeln!(out, "{} {}", self.name, count);
                continue;
            }
            let labels: Vec<String> = self
                .label_names
                .iter()
                .zip(values)
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect();
            let _ = writeln!(out, "{}{{{}}} {}", self.name, labels.join(","), count);
        }
    }
}

/// Value that can go up and down
#[derive(Debug)]
pub struct Gauge {
    name: &'static str,
    help: &'static str,
    value: Mutex<f64>,
}

impl Gauge {
    pub fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            value: Mutex::new(0.0),
        }
    }

    pub fn set(&self, value: f64) {
        *lock(&self.value) = value;
    }

    pub fn add(&self, delta: f64) {
        *lock(&self.value) += delta;
    }

    pub fn get(&self) -> f64 {
        *lock(&self.value)
    }

    fn render(&self, out: &mut String) {
        write_header(out, self.name, self.help, "gauge");
        let _ = writeln!(out, "{} {}", self.name, self.get());
    }
}

#[derive(Debug, Default)]
struct HistogramState {
    /// Per-bucket (non-cumulative) counts
    counts: Vec<u64>,
    sum: f64,
    count: u64,
}

/// Distribution of observed values over fixed buckets
#[derive(Debug)]
pub struct Histogram {
    name: &'static str,
    help: &'static str,
    buckets: Vec<f64>,
    state: Mutex<HistogramState>,
}

impl Histogram {
    pub fn new(name: &'static str, help: &'static str, buckets: &[f64]) -> Self {
        Self {
            name,
            help,
            buckets: buckets.to_vec(),
            state: Mutex::new(HistogramState {
                counts: vec![0; buckets.len()],
                ..HistogramState::default()
            }),
        }
    }

    pub fn observe(&self, value: f64) {
        let mut state = lock(&self.state);
        if let Some(idx) = self.buckets.iter().position(|&bound| value <= bound) {
            state.counts[idx] += 1;
        }
        state.sum += value;
        state.count += 1;
    }

    /// Start a timer observing elapsed seconds when dropped
    pub fn start_timer(&self) -> DurationTimer<'_> {
        DurationTimer {
            histogram: self,
            start: Instant::now(),
        }
    }

    pub fn count(&self) -> u64 {
        lock(&self.state).count
    }

    pub fn sum(&self) -> f64 {
        lock(&self.state).sum
    }

    fn render(&self, out: &mut String) {
        write_header(out, self.name, self.help, "histogram");
        let state = lock(&self.state);
        let mut cumulative = 0;
        for (bound, count) in self.buckets.iter().zip(&state.counts) {
            cumulative += count;
            let _ = writeln!(out, "{}_bucket{{le=\"{:?}\"}} {}", self.name, bound, cumulative);
        }
        let _ = writeln!(out, "{}_bucket{{le=\"+Inf\"}} {}", self.name, state.count);
        let _ = writeln!(out, "{}_sum {}", self.name, state.sum);
        let _ = writeln!(out, "{}_count {}", self.name, state.count);
    }
}

/// Observes elapsed time into a histogram on every exit path
#[must_use = "the duration is recorded when the timer is dropped"]
pub struct DurationTimer<'a> {
    histogram: &'a Histogram,
    start: Instant,
}

impl Drop for DurationTimer<'_> {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

/// Holds a gauge one higher for as long as it lives
#[must_use = "the gauge is decremented when the guard is dropped"]
pub struct InFlightGuard<'a> {
    gauge: &'a Gauge,
}

impl<'a> InFlightGuard<'a> {
    pub fn new(gauge: &'a Gauge) -> Self {
        gauge.add(1.0);
        Self { gauge }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.gauge.add(-1.0);
    }
}

/// Metrics recorded by the request handlers
#[derive(Debug)]
pub struct ServiceMetrics {
    pub predictions_total: Counter,
    pub forecasts_total: Counter,
    pub model_train_total: Counter,
    pub prediction_duration: Histogram,
    pub forecast_duration: Histogram,
    pub model_ready: Gauge,
    pub active_predictions: Gauge,
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self {
            predictions_total: Counter::new(
                "ai_forecast_predictions_total",
                "Total number of predictions made",
                &["endpoint", "status"],
            ),
            forecasts_total: Counter::new(
                "ai_forecast_forecasts_total",
                "Total number of forecasts made",
                &["days"],
            ),
            model_train_total: Counter::new(
                "ai_forecast_model_train_total",
                "Total number of model training operations",
                &["status"],
            ),
            prediction_duration: Histogram::new(
                "ai_forecast_prediction_duration_seconds",
                "Time spent processing prediction",
                &DURATION_BUCKETS,
            ),
            forecast_duration: Histogram::new(
                "ai_forecast_forecast_duration_seconds",
                "Time spent processing forecast",
                &DURATION_BUCKETS,
            ),
            model_ready: Gauge::new(
                "ai_forecast_model_ready",
                "Model readiness status (1=ready, 0=not ready)",
            ),
            active_predictions: Gauge::new(
                "ai_forecast_active_predictions",
                "Number of predictions currently being processed",
            ),
        }
    }

    pub fn record_prediction(&self, endpoint: &str, outcome: Outcome) {
        self.predictions_total.inc(&[endpoint, outcome.as_str()]);
    }

    pub fn record_forecast(&self, days: i64) {
        let days = days.to_string();
        self.forecasts_total.inc(&[days.as_str()]);
    }

    pub fn record_training(&self, outcome: Outcome) {
        self.model_train_total.inc(&[outcome.as_str()]);
    }

    pub fn set_model_ready(&self, ready: bool) {
        self.model_ready.set(if ready { 1.0 } else { 0.0 });
    }

    pub fn in_flight(&self) -> InFlightGuard<'_> {
        InFlightGuard::new(&self.active_predictions)
    }

    /// Render every metric in Prometheus text format
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.predictions_total.render(&mut out);
        self.forecasts_total.render(&mut out);
        self.model_train_total.render(&mut out);
        self.prediction_duration.render(&mut out);
        self.forecast_duration.render(&mut out);
        self.model_ready.render(&mut out);
        self.active_predictions.render(&mut out);
        out
    }
}
