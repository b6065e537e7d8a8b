//! Amiya Core - Shared types and cart model.
//!
//! This crate provides the types shared across Amiya components:
//! - `storefront` - Catalog client and persistent cart store
//! - (future) presentation and checkout layers
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no storage access. The [`cart::Cart`] model is a plain
//! in-memory value; persistence is layered on top by the storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and price parsing
//! - [`cart`] - The in-memory cart model and its derived selectors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, LineItem, ProductSnapshot, VariantKey};
pub use types::*;
