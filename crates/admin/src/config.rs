//! Environment-driven configuration.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// An environment variable is set but cannot be parsed.
    #[error("invalid value for {name}: {value}")]
    InvalidEnvVar {
        /// Variable name.
        name: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Connection settings for the bakery backend API.
pub struct BakeryApiConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Bearer token for authenticated endpoints.
    pub token: SecretString,
}

impl fmt::Debug for BakeryApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BakeryApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Admin server configuration.
#[derive(Debug)]
pub struct AdminConfig {
    /// Interface to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
    /// Backend connection settings.
    pub bakery: BakeryApiConfig,
}

impl AdminConfig {
    /// Load configuration from the environment.
    ///
    /// `CAKESHOP_API_URL` and `CAKESHOP_API_TOKEN` are required;
    /// `ADMIN_HOST` and `ADMIN_PORT` default to `127.0.0.1:3001`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is missing or a
    /// value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = require("CAKESHOP_API_URL")?;
        let token = SecretString::from(require("CAKESHOP_API_TOKEN")?);

        let host = match std::env::var("ADMIN_HOST") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "ADMIN_HOST",
                    value: raw,
                })?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match std::env::var("ADMIN_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "ADMIN_PORT",
                    value: raw,
                })?,
            Err(_) => 3001,
        };

        Ok(Self {
            host,
            port,
            bakery: BakeryApiConfig { base_url, token },
        })
    }

    /// The socket address to serve on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name))
}
