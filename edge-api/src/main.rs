/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Edge service entry point.
//!
//! A standalone Axum service that issues LiveKit access tokens and relays
//! requests to the sports-data provider.

use anyhow::{anyhow, Context};
use edge_api::config::Config;
use edge_api::routes;
use edge_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().map_err(|e| anyhow!(e))?;
    config.log_missing();

    let state = AppState::new(&config).context("failed to build HTTP client")?;
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("Edge service listening on {}", config.listen_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
