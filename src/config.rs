//! Environment-derived server configuration.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable naming the `PostgreSQL` connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable naming the HTTP bind address.
pub const BIND_ADDR_VAR: &str = "TASKBOARD_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// The bind address does not parse as a socket address.
    #[error("invalid bind address: {0}")]
    InvalidBindAddr(String),
}

/// Typed server configuration resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// The bind address defaults to `127.0.0.1:8080` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when `DATABASE_URL` is absent and
    /// [`ConfigError::InvalidBindAddr`] when the bind address does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingVar(DATABASE_URL_VAR))?;
        let bind_raw = env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
