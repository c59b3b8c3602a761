//! Service configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Listen address variable
pub const ADDR_VAR: &str = "BOL_API_ADDR";
/// Background image path variable
pub const BACKGROUND_VAR: &str = "BOL_BACKGROUND";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var} value '{value}': {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub background_path: PathBuf,
}

impl ServiceConfig {
    /// Reads `BOL_API_ADDR` and `BOL_BACKGROUND`, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|source| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: value.clone(),
                source,
            })?;
        }

        if let Some(value) = lookup(BACKGROUND_VAR).filter(|v| !v.is_empty()) {
            config.background_path = PathBuf::from(value);
        }

        Ok(config)
    }
}

/// `static/bg.jpg` next to this crate's sources
pub fn default_background_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("static")
        .join("bg.jpg")
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            background_path: default_background_path(),
        }
    }
}
