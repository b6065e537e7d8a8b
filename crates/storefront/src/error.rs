//! Unified error handling for the storefront crate.
//!
//! Cart mutations themselves never fail (storage problems are absorbed
//! fail-soft inside [`crate::cart::CartStore`] and logged); this type
//! exists for callers that also talk to the catalog or load
//! configuration and want a single error to bubble with `?`.

use thiserror::Error;

use crate::cart::StorageError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog feed operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart snapshot storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_call() -> Result<()> {
        Err(CatalogError::NotFound("999".to_string()))?;
        Ok(())
    }

    fn config_call() -> Result<()> {
        Err(ConfigError::MissingEnvVar("AMIYA_CATALOG_URL".to_string()))?;
        Ok(())
    }

    #[test]
    fn test_boundary_errors_convert() {
        assert!(matches!(catalog_call(), Err(AppError::Catalog(_))));
        assert!(matches!(config_call(), Err(AppError::Config(_))));
    }
}
