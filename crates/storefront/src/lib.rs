//! Amiya Storefront - catalog client and persistent cart.
//!
//! This crate is the application side of the cart core:
//!
//! - [`catalog`] - `reqwest`-based client for the remote product feed,
//!   with `moka` caching and normalization into a uniform product shape
//! - [`cart`] - write-through [`cart::CartStore`] wrapping the pure
//!   `amiya_core` cart model with a durable snapshot
//! - [`config`] - environment-variable configuration
//! - [`error`] - unified error type for callers that cross both
//!   boundaries
//!
//! Rendering, routing, authentication, and payment are out of scope;
//! presentation layers consume this crate through plain values.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;

pub use cart::{CartStore, CartStorage, JsonFileStorage, MemoryStorage, StorageError};
pub use catalog::{CatalogClient, CatalogError, CatalogProduct};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{AppError, Result};
