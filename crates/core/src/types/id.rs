//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_str_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different entity types. Catalog
//! identifiers are opaque strings (the upstream feed uses large numeric
//! IDs, sometimes suffixed with a variant ID), so the wrappers hold a
//! `String` rather than an integer.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use amiya_core::define_str_id;
/// define_str_id!(ProductId);
/// define_str_id!(VariantId);
///
/// let product_id = ProductId::new("8857596494051");
/// let variant_id = VariantId::new("47477003714787");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = variant_id;
/// ```
#[macro_export]
macro_rules! define_str_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_str_id!(ProductId);
