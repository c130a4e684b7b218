//! Contact API server.
//!
//! Serves the contact form for the static site:
//! - `POST /contact` validates a submission, verifies it with Turnstile, and
//!   relays it through Resend when configured
//! - `GET /health` for the hosting platform's liveness checks

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contact_api::web::{contact, health, AppState};
use contact_api::{Config, ResendClient, TurnstileClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("contact_api_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        turnstile_configured = config.turnstile_secret_key.is_some(),
        delivery_configured = config.delivery_configured(),
        request_timeout_ms = config.request_timeout_ms,
        "config_loaded"
    );

    // One outbound client shared by both collaborators, with a deadline so a
    // hung upstream cannot stall the handler indefinitely.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .build()
        .context("Failed to build HTTP client")?;

    let state = AppState::new(
        config.clone(),
        Arc::new(TurnstileClient::new(http.clone())),
        Arc::new(ResendClient::new(http)),
    );

    // Build the router
    let app = Router::new()
        .route("/health", get(health))
        .route("/contact", post(contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "contact_api_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("contact_api_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("contact_api_shutting_down");
}
