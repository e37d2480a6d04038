use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::web::{app_router, AppState};

/// Bind and serve the site until Ctrl-C.
pub async fn start_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let base_url = state.config.base_url.clone();
    let environment = state.config.environment;
    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, %base_url, %environment, "HTTP server listening");
    info!("Health check: http://localhost:{}/health", port);
    info!("Sitemap:      http://localhost:{}/sitemap.xml", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
