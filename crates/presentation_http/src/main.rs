//! GeoGateway HTTP server

use anyhow::Context;
use infrastructure::{AppConfig, init_tracing};
use presentation_http::{
    AppState, create_app,
    server::{serve_with_shutdown, shutdown_signal},
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first: it selects the log format
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.telemetry, config.server.log_format)?;

    info!("GeoGateway v{} starting...", env!("CARGO_PKG_VERSION"));

    config.validate().context("Invalid configuration")?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        pelias = %config.pelias.base_url,
        api_key_configured = config.pelias.api_key.is_some(),
        timeout_secs = config.pelias.timeout_secs,
        "Configuration loaded"
    );

    let addr = config.server.bind_address();
    let drain_timeout = config.server.shutdown_timeout();

    let state = AppState::from_config(config).context("Failed to initialize Pelias client")?;
    let app = create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);
    info!("API docs: http://{}/swagger-ui", addr);

    serve_with_shutdown(listener, app, shutdown_signal(), drain_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}
