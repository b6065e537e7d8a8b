//! In-memory cart model.
//!
//! A [`Cart`] is an insertion-ordered collection of [`LineItem`]s, unique
//! by (product, variant). All operations are total: bad input degrades to
//! a no-op or a safe default, never an error. Persistence is layered on
//! top of this model by the storefront crate; nothing here does I/O.
//!
//! # Invariants
//!
//! - No two lines share the same (product ID, variant key); adding a
//!   duplicate merges quantities into the existing line.
//! - Every line quantity is at least 1. Quantity updates below 1 are
//!   ignored; callers wanting removal must call [`Cart::remove_item`].
//! - `total_count` and `total_price` are derived from the lines on every
//!   call, never cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, lenient_price};

// =============================================================================
// Line Items
// =============================================================================

/// A size/color selection identifying a product variant.
///
/// Empty strings mean "no selection" for that dimension; a product with
/// no options uses the default (both empty). Together with a product ID
/// this forms a line item's identity within the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    /// Selected size, or empty when the product has no size options.
    #[serde(rename = "selectedSize", default)]
    pub size: String,
    /// Selected color, or empty when the product has no color options.
    #[serde(rename = "selectedColor", default)]
    pub color: String,
}

impl VariantKey {
    /// Create a variant key from a size and color selection.
    #[must_use]
    pub fn new(size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
        }
    }
}

/// Denormalized catalog record captured when an item is added.
///
/// The price is the raw catalog string; it is parsed leniently at
/// add-time (unparseable input snapshots as zero) and never re-read
/// from the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSnapshot {
    /// Catalog product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Raw catalog price string (e.g., `"49.95"`).
    pub price: String,
    /// Primary image URL, if the product has one.
    pub image: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// One product+variant+quantity entry in a cart.
///
/// The serde field names match the persisted snapshot layout
/// (`id`/`name`/`price`/`image`/`selectedSize`/`selectedColor`/`quantity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog product ID this line refers to.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Display name, denormalized from the catalog at add-time.
    pub name: String,
    /// Unit price snapshot taken at add-time, not live-updated.
    #[serde(rename = "price")]
    pub unit_price: Decimal,
    /// Primary image URL, denormalized from the catalog at add-time.
    #[serde(default)]
    pub image: Option<String>,
    /// Size/color selection; part of the line's identity.
    #[serde(flatten)]
    pub variant: VariantKey,
    /// Number of units; always at least 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl LineItem {
    /// Whether this line matches the given identity.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, variant: &VariantKey) -> bool {
        self.product_id == *product_id && self.variant == *variant
    }

    /// Extended price for this line (`unit_price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An insertion-ordered cart of line items, unique by (product, variant).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from previously persisted line items.
    ///
    /// Re-establishes the model invariants on data the process does not
    /// control: duplicate identities merge into the first occurrence
    /// (quantities summed, first price wins) and quantities below 1 are
    /// raised to 1.
    #[must_use]
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for mut item in items {
            item.quantity = item.quantity.max(1);
            match cart.position(&item.product_id, &item.variant) {
                Some(index) => {
                    if let Some(existing) = cart.items.get_mut(index) {
                        existing.quantity = existing.quantity.saturating_add(item.quantity);
                    }
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// All line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line by identity.
    #[must_use]
    pub fn get(&self, product_id: &ProductId, variant: &VariantKey) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|item| item.matches(product_id, variant))
    }

    fn position(&self, product_id: &ProductId, variant: &VariantKey) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.matches(product_id, variant))
    }

    fn find_mut(&mut self, product_id: &ProductId, variant: &VariantKey) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| item.matches(product_id, variant))
    }

    /// Add units of a product variant to the cart.
    ///
    /// If a line with the same (product, variant) identity exists, its
    /// quantity is incremented (saturating at `u32::MAX`); otherwise a new
    /// line is appended with the price and display fields snapshotted from
    /// `product`. A quantity of 0 is treated as 1.
    pub fn add_item(&mut self, product: &ProductSnapshot, variant: VariantKey, quantity: u32) {
        let quantity = quantity.max(1);
        match self.position(&product.id, &variant) {
            Some(index) => {
                if let Some(existing) = self.items.get_mut(index) {
                    existing.quantity = existing.quantity.saturating_add(quantity);
                }
            }
            None => self.items.push(LineItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit_price: lenient_price(&product.price),
                image: product.image.clone(),
                variant,
                quantity,
            }),
        }
    }

    /// Remove the line with the given identity.
    ///
    /// Returns `true` if a line was removed; an absent line is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId, variant: &VariantKey) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.matches(product_id, variant));
        self.items.len() != before
    }

    /// Set the quantity on the line with the given identity.
    ///
    /// Returns `true` if the quantity was applied. A `new_quantity` below
    /// 1 is silently ignored (callers wanting removal use
    /// [`Cart::remove_item`]), as is an absent line.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        variant: &VariantKey,
        new_quantity: u32,
    ) -> bool {
        if new_quantity < 1 {
            return false;
        }
        match self.find_mut(product_id, variant) {
            Some(item) => {
                item.quantity = new_quantity;
                true
            }
            None => false,
        }
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Total price across all lines (`Σ unit_price * quantity`).
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }
}
