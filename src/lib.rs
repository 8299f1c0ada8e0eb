use anyhow::{Context, Result};
use portal_config::{AccessConfig, Config};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

pub mod access_gate;
pub mod error;
pub mod resources;
pub mod routes;
pub mod utils;

use resources::ResourceGateway;

/// Serve the portal on an already-bound listener until Ctrl-C.
pub async fn serve(
    listener: TcpListener,
    gateway: Arc<ResourceGateway>,
    access: Arc<AccessConfig>,
) -> Result<()> {
    let app = routes::create_router(gateway, access);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}

/// Bind `config.bind_address` and serve resources from the working directory.
pub async fn run(config: Config) -> Result<()> {
    let gateway = ResourceGateway::from_working_dir()
        .context("Failed to resolve the resources directory")?;
    if !gateway.root().is_dir() {
        tracing::warn!(
            root = %gateway.root().display(),
            "Resources directory does not exist; every resource request will return 404"
        );
    }

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;

    tracing::info!(
        address = %config.bind_address,
        root = %gateway.root().display(),
        protected = ?config.access.protected_paths,
        public = ?config.access.public_paths,
        "Portal server listening"
    );

    serve(listener, Arc::new(gateway), Arc::new(config.access)).await
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received. Shutting down..."),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
