//! # ai-forecast-server
//!
//! Binary entry point: reads configuration, initializes logging and serves
//! the forecasting API.

use forecast_facade::{Forecaster, ForecasterBuilder};
use server::config::ServerConfig;
use server::{app, telemetry, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    telemetry::init_tracing(config.log_format);

    let forecaster = ForecasterBuilder::new()
        .maybe_seed(config.training_seed)
        .build()?;
    if config.train_on_startup {
        forecaster.train()?;
    }

    let state = AppState::new(Arc::new(forecaster));
    let addr = config.socket_addr()?;

    tracing::info!(
        "ai-forecast-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
