//! User Gateway Server
//!
//! Serves the user pass-through API in front of the remote user service.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_gateway::{build_router, config::AppConfig, state::AppState, ResultExt};

/// Initialize tracing/logging.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,user_gateway=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    // Logging is not up yet, so a bad config is reported after init
    let loaded = AppConfig::from_env();
    let log_json = loaded.as_ref().map(|c| c.log_json).unwrap_or(false);
    init_tracing(log_json);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting User Gateway"
    );

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load app config, using defaults");
        AppConfig::default()
    });

    tracing::info!(
        host = %config.host,
        port = config.port,
        upstream = %config.upstream_url,
        timeout_secs = config.upstream_timeout_secs,
        "Configuration loaded"
    );

    let addr = config
        .bind_address()
        .parse::<SocketAddr>()
        .log("Invalid bind address")?;

    let state = AppState::from_config(config).log("Failed to create user service client")?;
    let app = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .log("Failed to bind to address")?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Routes: GET /users, GET|PUT /users/{{id}}, POST /process, GET /health");

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .log("Failed to serve app")?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
