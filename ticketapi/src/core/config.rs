use std::{net::SocketAddr, path::PathBuf};
use thiserror::Error;

/// Runtime configuration, read once from the environment at startup.
///
/// * `BIND_ADDR` - address the HTTP server listens on (default `127.0.0.1:9999`).
/// * `TICKET_OUTPUT_DIR` - directory receiving the generated PDF receipts
///   (default `<system temp dir>/tickets`).
///
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub output_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    BindAddr(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 9999)),
            output_dir: std::env::temp_dir().join("tickets"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::BindAddr(raw))?,
            None => defaults.bind_addr,
        };
        let output_dir = lookup("TICKET_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        Ok(Self {
            bind_addr,
            output_dir,
        })
    }
}
