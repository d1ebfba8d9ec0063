mod analysis;
mod comparison;
mod config;
mod contracts;
mod errors;
mod llm_client;
mod models;
mod render;
mod routes;
mod search;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{build_http_client, Backend};
use crate::routes::build_router;
use crate::state::AppState;

/// Local-only demo server.
const BIND_ADDR: &str = "127.0.0.1:7860";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (missing credentials are reported, not fatal)
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tender v{}", env!("CARGO_PKG_VERSION"));

    for problem in config.problems() {
        warn!("{problem}; searches will report a configuration error until it is fixed");
    }

    // Shared HTTP client for both backends
    let http = build_http_client().context("Failed to build HTTP client")?;
    for backend in Backend::ALL {
        info!(
            "{:?} backend: {} ({})",
            backend,
            backend.label(),
            backend.model()
        );
    }

    let state = AppState::new(&config, &http);

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = BIND_ADDR.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr} (open it in a browser; Ctrl+C to stop)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
