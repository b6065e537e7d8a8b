//! Integration tests for Amiya.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p amiya-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_session` - Cart store + file storage across sessions
//! - `catalog_feed` - Catalog client against a mock product feed
//!
//! The helpers below build canned feed responses so individual tests
//! stay focused on behavior rather than fixture plumbing.

use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber so fail-soft `warn!` output is visible
/// under `--nocapture`. Safe to call from every test; repeat calls are
/// ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Build a feed product record in the remote `products.json` shape.
#[must_use]
pub fn feed_product(id: u64, title: &str, price: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "body_html": format!("<p>{title}</p>"),
        "variants": [
            {"id": id * 10, "title": "M / Black", "price": price, "option1": "M", "option2": "Black"}
        ],
        "images": [
            {"src": format!("https://cdn.example.com/{id}.jpg")}
        ],
        "options": [
            {"name": "Size", "values": ["S", "M", "L"]},
            {"name": "Color", "values": ["Black", "White"]}
        ]
    })
}

/// Build a full feed response body from product records.
#[must_use]
pub fn feed_body(products: &[Value]) -> Value {
    json!({ "products": products })
}
