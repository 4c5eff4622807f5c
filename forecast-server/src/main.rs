//! HTTP front-end for the forecast gateway.
//!
//! This crate focuses on:
//! - Reading and validating process configuration (fail fast)
//! - Routing the two forecast endpoints
//! - Converting typed failures to JSON error responses

use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use forecast_core::{Config, ForecastService};
use forecast_server::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Missing configuration aborts here, before the listener binds.
    let config = Config::from_env().context("Invalid process configuration")?;

    let service =
        Arc::new(ForecastService::from_config(&config).context("Failed to build forecast service")?);

    let app = routes::router(service);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("forecast gateway listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server exited with an error")?;

    Ok(())
}
