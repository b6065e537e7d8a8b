//! Core types for Amiya.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;

pub use id::ProductId;
pub use price::lenient_price;
