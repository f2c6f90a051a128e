//! HTTP server command handler.

use std::net::SocketAddr;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::api;
use crate::config::Config;
use crate::context::Context;

use super::App;

impl App {
    /// Run the HTTP API.
    pub async fn run_serve(&self, host: &str, port: u16, in_memory: bool) -> Result<()> {
        tracing::info!("Starting MythRealms HTTP server");

        let config = Config::load()?;

        let ctx = if in_memory {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            Context::in_memory(config)
        } else {
            Context::from_config(config).await?
        };

        ctx.assets
            .ensure_root()
            .await
            .map_err(|e| eyre!("Failed to create upload directory: {}", e))?;
        tracing::info!("Serving uploads from {}", ctx.assets.root().display());

        let app = api::router(ctx);

        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|e| eyre!("Invalid address {}:{}: {}", host, port, e))?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

        tracing::info!("MythRealms HTTP server listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "HTTP server error");
                eyre!("HTTP server error: {}", e)
            })?;

        tracing::info!("HTTP server shutting down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
