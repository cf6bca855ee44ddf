//! FILENAME: app/server/src/config.rs
// PURPOSE: Server configuration read from environment variables.
//
//   CALC_BIND_ADDR      - listen address (default: 0.0.0.0:8080)
//   CALC_MAX_BODY_BYTES - largest accepted request body (default: 65536)

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "CALC_BIND_ADDR";
pub const MAX_BODY_BYTES_VAR: &str = "CALC_MAX_BODY_BYTES";

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("{var}={value:?} is not a positive byte count")]
    InvalidBodyLimit { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: DEFAULT_BIND_ADDR,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    /// Unset variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            None => DEFAULT_BIND_ADDR,
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value: value.clone(),
                    source,
                })?,
        };

        let max_body_bytes = match lookup(MAX_BODY_BYTES_VAR) {
            None => DEFAULT_MAX_BODY_BYTES,
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidBodyLimit {
                        var: MAX_BODY_BYTES_VAR,
                        value,
                    })
                }
            },
        };

        Ok(ServerConfig {
            bind_addr,
            max_body_bytes,
        })
    }
}
