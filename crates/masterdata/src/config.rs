//! Masterdata configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `VTEX_ACCOUNT` - Default tenant account name (e.g., mystore)
//!
//! ## Optional
//! - `VTEX_ENVIRONMENT` - Platform host suffix (default: vtexcommercestable.com.br)
//! - `WISHLIST_DATA_ENTITY` - Masterdata data entity name (default: wishlist)
//! - `WISHLIST_SCHEMA` - Schema name within the data entity (default: wishlist)

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Masterdata connection configuration.
///
/// One configuration targets one data-entity/schema pair on one platform
/// environment. The account here is the default tenant; callers may route a
/// request to another tenant of the same environment.
#[derive(Debug, Clone)]
pub struct MasterdataConfig {
    /// Default tenant account name.
    pub account: String,
    /// Platform host suffix appended to the account (no leading dot).
    pub environment: String,
    /// Masterdata data entity holding wishlist documents.
    pub data_entity: String,
    /// Schema name the documents must satisfy.
    pub schema_name: String,
}

impl MasterdataConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `VTEX_ACCOUNT` is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            account: get_required_env("VTEX_ACCOUNT")?,
            environment: get_env_or_default("VTEX_ENVIRONMENT", "vtexcommercestable.com.br"),
            data_entity: get_env_or_default("WISHLIST_DATA_ENTITY", "wishlist"),
            schema_name: get_env_or_default("WISHLIST_SCHEMA", "wishlist"),
        })
    }
}

/// Get a required environment variable.
pub(crate) fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
pub(crate) fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
