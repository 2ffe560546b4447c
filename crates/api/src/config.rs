//! Process configuration, read from environment variables.
//!
//! | Variable               | Default        |
//! |------------------------|----------------|
//! | `ITEMSTORE_BIND_ADDR`  | `0.0.0.0:8080` |
//! | `ITEMSTORE_LOG_FORMAT` | `json`         |
//!
//! Log filtering itself follows `RUST_LOG`.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

use itemstore_observability::{LogFormat, ParseLogFormatError};

pub const BIND_ADDR_VAR: &str = "ITEMSTORE_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "ITEMSTORE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8080);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ITEMSTORE_BIND_ADDR={value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("ITEMSTORE_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset or blank values fall back
    /// to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = var(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr { value, source })?;
        }

        if let Some(value) = var(LOG_FORMAT_VAR) {
            config.log_format = value.parse()?;
        }

        Ok(config)
    }
}
