//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `AMIYA_CATALOG_URL` - Base URL of the product feed (e.g.,
//!   `https://amiya.com/collections/all`); the client requests
//!   `{base}/products.json`
//!
//! ## Optional
//! - `AMIYA_CART_PATH` - Path of the cart snapshot file
//!   (default: `./data/cart.json`)
//! - `AMIYA_CATALOG_CACHE_TTL_SECS` - Product feed cache TTL in seconds
//!   (default: 300)

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_CART_PATH: &str = "./data/cart.json";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the remote product feed
    pub catalog_url: Url,
    /// Path of the durable cart snapshot file
    pub cart_path: PathBuf,
    /// How long product listings stay cached
    pub catalog_cache_ttl: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a
    /// value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let catalog_url = parse_url("AMIYA_CATALOG_URL", &require_env("AMIYA_CATALOG_URL")?)?;

        let cart_path = env::var("AMIYA_CART_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_CART_PATH), PathBuf::from);

        let catalog_cache_ttl = match env::var("AMIYA_CATALOG_CACHE_TTL_SECS") {
            Ok(raw) => parse_ttl("AMIYA_CATALOG_CACHE_TTL_SECS", &raw)?,
            Err(_) => Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        };

        Ok(Self {
            catalog_url,
            cart_path,
            catalog_cache_ttl,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
}

fn parse_ttl(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_valid() {
        let url = parse_url("TEST_VAR", "https://amiya.com/collections/all").unwrap();
        assert_eq!(url.host_str(), Some("amiya.com"));
    }

    #[test]
    fn test_parse_url_invalid() {
        let result = parse_url("TEST_VAR", "not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_parse_ttl_valid() {
        assert_eq!(parse_ttl("TEST_VAR", "60").unwrap(), Duration::from_secs(60));
    }

    #[test]
    fn test_parse_ttl_invalid() {
        let result = parse_ttl("TEST_VAR", "soon");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
