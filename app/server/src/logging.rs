//! FILENAME: app/server/src/logging.rs
// PURPOSE: Process-wide log subscriber setup.
// CONTEXT: Library code logs through the `log` facade; the subscriber installed
//          here also captures those records alongside tower-http request spans.
//          RUST_LOG overrides the default filter.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "calc_server=info,engine=info,tower_http=info";

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}
