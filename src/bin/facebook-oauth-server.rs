// ABOUTME: Server binary hosting the Facebook authorization code flow over HTTP
// ABOUTME: Loads provider configuration from environment and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Facebook OAuth Server
//!
//! Serves `GET /auth/facebook` (flow start and callback) plus health checks.
//! Provider settings come from `FACEBOOK_*` environment variables.

use anyhow::{Context, Result};
use clap::Parser;
use facebook_oauth::{
    constants::env_config, logging, routes, FacebookAuthFlow, HttpClientConfig, ProviderConfig,
    ReqwestHttpClient,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "facebook-oauth-server")]
#[command(about = "Facebook OAuth 2.0 authorization code flow server")]
struct Args {
    /// Address to bind
    #[arg(long, env = env_config::HOST, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, env = env_config::PORT, default_value_t = 8081)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let config = ProviderConfig::from_env().context("Invalid Facebook OAuth configuration")?;
    let http_config = HttpClientConfig::from_env();
    info!(
        client_id = config.client_id(),
        redirect_uri = config.redirect_uri(),
        timeout_secs = http_config.timeout.as_secs(),
        "Facebook OAuth provider loaded"
    );

    let flow = FacebookAuthFlow::new(config, Arc::new(ReqwestHttpClient::new(http_config)))?;
    let app = routes::router(Arc::new(flow));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", args.host, args.port))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "Facebook OAuth server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
