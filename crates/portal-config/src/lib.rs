// ============================================================================
// Portal Config - Centralized configuration management
// ============================================================================
//
// Configuration for the portal server binary. Everything is loaded from
// environment variables with defaults suitable for local development.
//
// ============================================================================

mod access;
mod constants;

pub use access::AccessConfig;
pub use constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_HOME_PATH, DEFAULT_LOGIN_PATH, DEFAULT_SESSION_COOKIE,
};

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Main configuration structure for the portal server
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_address: String,
    /// Tracing filter directive (same syntax as `RUST_LOG`)
    pub rust_log: String,
    /// Route access gate lists and session cookie
    pub access: AccessConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        bind_address
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDRESS is not a socket address: {}", bind_address))?;

        Ok(Self {
            bind_address,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            access: AccessConfig::from_env()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            rust_log: "info".to_string(),
            access: AccessConfig::default(),
        }
    }
}
