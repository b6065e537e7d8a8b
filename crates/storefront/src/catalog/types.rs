//! Wire and domain types for the product feed.
//!
//! The raw types mirror the feed's JSON shape and exist only for
//! deserialization; callers see the normalized [`CatalogProduct`].

use serde::{Deserialize, Serialize};

use amiya_core::{ProductId, ProductSnapshot};

// =============================================================================
// Raw Feed Types
// =============================================================================

/// Top-level feed response: `{ "products": [...] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<RawProduct>,
}

/// A product as delivered by the feed. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawProduct {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body_html: String,
    #[serde(default)]
    pub variants: Vec<RawVariant>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    #[serde(default)]
    pub options: Vec<RawOption>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawVariant {
    #[serde(default)]
    pub price: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawImage {
    #[serde(default)]
    pub src: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

// =============================================================================
// Normalized Product
// =============================================================================

/// A catalog product normalized into the uniform shape the cart and
/// presentation layers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Catalog product ID.
    pub id: ProductId,
    /// Display name (the feed's `title`).
    pub name: String,
    /// Raw price string from the first variant (e.g., `"49.95"`).
    /// Empty when the product has no variants.
    pub price: String,
    /// Primary image URL, if any.
    pub image: Option<String>,
    /// Available sizes, from the option list named "Size".
    pub sizes: Vec<String>,
    /// Available colors, from the option list named "Color".
    pub colors: Vec<String>,
    /// Product description (the feed's `body_html`, unrendered).
    pub description: String,
}

impl CatalogProduct {
    /// The denormalized record the cart captures at add-time.
    #[must_use]
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
        }
    }
}
