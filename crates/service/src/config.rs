//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `VTEX_ACCOUNT` - Default tenant account name
//!
//! ## Optional
//! - `WISHLIST_HOST` - Bind address (default: 127.0.0.1)
//! - `WISHLIST_PORT` - Listen port (default: 3000)
//! - `VTEX_ENVIRONMENT`, `WISHLIST_DATA_ENTITY`, `WISHLIST_SCHEMA` - see
//!   `wishlist-masterdata`

use std::net::{IpAddr, SocketAddr};

use wishlist_masterdata::{ConfigError, MasterdataConfig};

/// Wishlist service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Masterdata connection configuration
    pub masterdata: MasterdataConfig,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("WISHLIST_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("WISHLIST_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("WISHLIST_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("WISHLIST_PORT".to_string(), e.to_string()))?;
        let masterdata = MasterdataConfig::from_env()?;

        Ok(Self {
            host,
            port,
            masterdata,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
