/// Bangladesh environmental monitoring API
mod clients;
mod config;
mod domain;
mod errors;
mod handlers;
mod repo;
mod routes;
mod services;
mod utils;

#[cfg(test)]
mod test_support;

use crate::clients::StacClient;
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::repo::EnvironmentRepo;
use crate::routes::build_router;
use crate::services::{EnvironmentService, SatelliteService};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!(
        stac_api_url = %config.stac_api_url,
        stac_timeout = ?config.stac_timeout,
        "Configuration loaded successfully"
    );

    // Initialize clients and services
    let stac_client = StacClient::new(config.stac_api_url.clone(), config.stac_timeout)?;
    let state = AppState {
        environment: Arc::new(EnvironmentService::new(EnvironmentRepo::new())),
        satellite: Arc::new(SatelliteService::new(stac_client)),
    };

    if let Some(dir) = &config.static_dir {
        info!("Serving client bundle from {}", dir.display());
    }
    let app = build_router(state, config.static_dir.as_deref());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("bd_envmon listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
    info!("Shutdown signal received");
}
