//! FILENAME: app/server/src/lib.rs
// PURPOSE: HTTP transport shell around the expression engine.
// CONTEXT: Builds the axum router and runs it on a tokio listener. All
//          arithmetic lives in the `engine` crate; nothing here is shared
//          between requests.

use std::future::Future;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod api_types;
pub mod config;
pub mod handlers;
pub mod logging;

pub use api_types::CalcRequest;
pub use config::{ConfigError, ServerConfig};
pub use handlers::format_outcome;
pub use logging::init_logging;

/// Builds the router with all routes and middleware.
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", post(handlers::calculate))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Serves on an already-bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let app = build_router(config);
    if let Ok(addr) = listener.local_addr() {
        log::info!("calc-server listening on {}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on ctrl-c. If the signal handler cannot be installed, never resolves.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("shutdown signal received");
}
