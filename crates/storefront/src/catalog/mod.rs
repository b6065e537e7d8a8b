//! Product feed client.
//!
//! # Architecture
//!
//! - Plain JSON feed: HTTP GET `{base}/products.json` returning
//!   `{ "products": [...] }`
//! - The feed is source of truth - no local sync, direct requests
//! - In-memory caching via `moka` for the product listing (TTL from
//!   configuration, 5 minutes by default)
//!
//! The raw feed shape is normalized into [`CatalogProduct`]; the cart
//! only ever sees the uniform (id, name, price, image, sizes, colors,
//! description) record.
//!
//! # Example
//!
//! ```rust,ignore
//! use amiya_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog_url, config.catalog_cache_ttl);
//!
//! let products = client.get_products().await?;
//! let shirt = client.get_product(&products[0].id).await?;
//! cart.add_item(&shirt.snapshot(), VariantKey::new("M", "White"), 1);
//! ```

mod conversions;
pub mod types;

pub use types::CatalogProduct;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use amiya_core::ProductId;

use conversions::convert_product;
use types::ProductsResponse;

/// Errors that can occur when talking to the product feed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status.
    #[error("Feed returned status {0}")]
    Status(reqwest::StatusCode),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Product not present in the feed.
    #[error("Not found: {0}")]
    NotFound(String),
}

const PRODUCTS_CACHE_KEY: &str = "products";

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the remote product feed.
///
/// Cheap to clone; the HTTP client and cache are shared.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: String,
    cache: Cache<String, Vec<CatalogProduct>>,
}

impl CatalogClient {
    /// Create a new feed client requesting `{base_url}/products.json`.
    #[must_use]
    pub fn new(base_url: &Url, cache_ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(8)
            .time_to_live(cache_ttl)
            .build();

        let endpoint = format!(
            "{}/products.json",
            base_url.as_str().trim_end_matches('/')
        );

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint,
                cache,
            }),
        }
    }

    /// Create a client from loaded configuration.
    #[must_use]
    pub fn from_config(config: &crate::config::StorefrontConfig) -> Self {
        Self::new(&config.catalog_url, config.catalog_cache_ttl)
    }

    /// Get the normalized product listing, from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the request fails, the feed answers
    /// with a non-success status, or the body does not parse.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        if let Some(products) = self.inner.cache.get(PRODUCTS_CACHE_KEY).await {
            debug!("Cache hit for product listing");
            return Ok(products);
        }

        let products = self.fetch_products().await?;
        self.inner
            .cache
            .insert(PRODUCTS_CACHE_KEY.to_string(), products.clone())
            .await;
        Ok(products)
    }

    /// Get a single product by ID from the listing.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the ID is not in the feed,
    /// or any listing error from [`Self::get_products`].
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &ProductId) -> Result<CatalogProduct, CatalogError> {
        let products = self.get_products().await?;
        products
            .into_iter()
            .find(|product| product.id == *id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Fetch and normalize the product listing from the feed.
    async fn fetch_products(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        debug!(endpoint = %self.inner.endpoint, "Fetching product feed");

        let response = self
            .inner
            .client
            .get(&self.inner.endpoint)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Product feed returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        let parsed: ProductsResponse = serde_json::from_str(&body).inspect_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse product feed response"
            );
        })?;

        Ok(parsed
            .products
            .into_iter()
            .map(convert_product)
            .collect())
    }
}
