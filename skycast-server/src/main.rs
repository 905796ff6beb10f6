//! Binary crate for the `skycast` HTTP service.
//!
//! This crate focuses on:
//! - Parsing server flags
//! - Logging and configuration setup
//! - The inbound HTTP surface (routing, query extraction, error mapping)

use anyhow::Context;
use clap::Parser;
use skycast_core::{Aggregator, Config, SunTimeClient, WeatherClient};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod routes;

use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(listen) = args.listen {
        config.listen = listen;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .init();

    let sun = SunTimeClient::with_base_url(&config.sun_api_url)
        .context("Failed to build sun-time client")?;
    let weather = WeatherClient::with_base_url(&config.weather_api_url, config.resolved_api_key())
        .context("Failed to build weather client")?;

    let state = Arc::new(AppState { aggregator: Aggregator::new(sun, weather) });
    let app = routes::router(state);

    info!("Starting skycast on http://{}", config.listen);

    let listener = tokio::net::TcpListener::bind(&config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;
    axum::serve(listener, app).await?;

    Ok(())
}
