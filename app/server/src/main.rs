//! FILENAME: app/server/src/main.rs
// PURPOSE: Service entry point: logging, configuration, listener.

use calc_server::{init_logging, serve, shutdown_signal, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging()?;

    let config = ServerConfig::from_env()?;
    log::info!(
        "configuration loaded (bind_addr={}, max_body_bytes={})",
        config.bind_addr,
        config.max_body_bytes
    );

    let listener = TcpListener::bind(config.bind_addr).await?;
    serve(listener, &config, shutdown_signal()).await?;

    Ok(())
}
