//! Stroomp API server binary.
//!
//! Entry point for the REST API and WebSocket server.

use std::env;

use anyhow::Context;
use stroomp_api::{AppState, Server, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,stroomp_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let host = env::var("STROOMP_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("STROOMP_API_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse()
        .context("STROOMP_API_PORT must be a valid port number")?;

    let config = ServerConfig::new(host, port);
    let state = AppState::new();

    tracing::info!(
        "Starting Stroomp API server on {}:{}",
        config.host,
        config.port
    );

    let server = Server::new(config, state);
    server.run().await?;

    Ok(())
}
