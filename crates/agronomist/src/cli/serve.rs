//! Serve command handler.

use super::ServeArgs;
use agronomist::Advisor;
use agronomist::api::create_router;
use anyhow::Context;
use tracing::{info, warn};

/// Handle the `serve` command
pub async fn handle_serve_command(advisor: Advisor, args: ServeArgs) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;

    info!(
        addr = %args.bind,
        upload_dir = %advisor.upload_dir().display(),
        "Serving HTTP front-end. Press Ctrl+C to stop."
    );

    axum::serve(listener, create_router(advisor))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
