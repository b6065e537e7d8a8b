//! Write-through cart store.
//!
//! [`CartStore`] wraps the pure [`amiya_core::Cart`] model with a
//! [`CartStorage`] and persists the item collection after every
//! mutation. The model stays storage-free, so cart logic tests inject a
//! fake adapter; the store owns only the write-through and the
//! fail-soft hydration.
//!
//! The store is an explicit value the caller owns and passes around.
//! There is no ambient global cart.

mod storage;

pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError};

use tracing::warn;

use amiya_core::{Cart, LineItem, ProductId, ProductSnapshot, VariantKey};
use rust_decimal::Decimal;

/// A cart backed by durable snapshot storage.
///
/// Mutations run the in-memory operation first and then write through
/// to storage. Storage failures are logged at `warn` and absorbed: a
/// cart operation never fails, the session just loses durability until
/// the next successful write.
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
    recently_updated: bool,
}

impl<S: CartStorage> CartStore<S> {
    /// Open a store, hydrating from the persisted snapshot.
    ///
    /// An absent snapshot starts an empty cart; an unreadable or corrupt
    /// snapshot does the same after logging (fail-soft, never surfaced).
    pub fn open(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(items)) => Cart::from_items(items),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load cart snapshot, starting empty");
                Cart::new()
            }
        };

        Self {
            cart,
            storage,
            recently_updated: false,
        }
    }

    /// The underlying cart model.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// All line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.cart.total_count()
    }

    /// Total price across all lines.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.cart.total_price()
    }

    /// Whether an add has happened since the flag was last reset.
    ///
    /// This is UI-feedback state (e.g., pulsing the cart badge); the
    /// presentation layer decides when to reset it.
    #[must_use]
    pub const fn recently_updated(&self) -> bool {
        self.recently_updated
    }

    /// Reset the recently-updated flag.
    pub const fn reset_update_flag(&mut self) {
        self.recently_updated = false;
    }

    /// Add units of a product variant and persist.
    pub fn add_item(&mut self, product: &ProductSnapshot, variant: VariantKey, quantity: u32) {
        self.cart.add_item(product, variant, quantity);
        self.recently_updated = true;
        self.persist();
    }

    /// Remove a line and persist. Returns `true` if a line was removed.
    pub fn remove_item(&mut self, product_id: &ProductId, variant: &VariantKey) -> bool {
        let removed = self.cart.remove_item(product_id, variant);
        if removed {
            self.persist();
        }
        removed
    }

    /// Set a line's quantity and persist. Returns `true` if applied.
    ///
    /// Quantities below 1 and absent lines are silent no-ops and skip
    /// the persistence write.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        variant: &VariantKey,
        new_quantity: u32,
    ) -> bool {
        let applied = self.cart.update_quantity(product_id, variant, new_quantity);
        if applied {
            self.persist();
        }
        applied
    }

    /// Empty the cart and remove the persisted snapshot entirely.
    ///
    /// The snapshot key is deleted, not rewritten as an empty list;
    /// downstream code checks for snapshot presence. Idempotent.
    pub fn clear(&mut self) {
        self.cart.clear();
        if let Err(e) = self.storage.clear() {
            warn!(error = %e, "Failed to remove cart snapshot");
        }
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(self.cart.items()) {
            warn!(error = %e, "Failed to persist cart snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn product(id: &str, price: &str) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: price.to_string(),
            image: None,
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    /// Counts calls through to an inner storage.
    #[derive(Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        saves: Cell<usize>,
        clears: Cell<usize>,
    }

    impl CartStorage for CountingStorage {
        fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
            self.saves.set(self.saves.get() + 1);
            self.inner.save(items)
        }

        fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
            self.inner.load()
        }

        fn clear(&self) -> Result<(), StorageError> {
            self.clears.set(self.clears.get() + 1);
            self.inner.clear()
        }
    }

    /// Storage whose writes always fail.
    struct BrokenStorage;

    impl CartStorage for BrokenStorage {
        fn save(&self, _items: &[LineItem]) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk on fire")))
        }

        fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk on fire")))
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk on fire")))
        }
    }

    #[test]
    fn test_open_empty_when_no_snapshot() {
        let store = CartStore::open(MemoryStorage::new());
        assert!(store.items().is_empty());
        assert!(!store.recently_updated());
    }

    #[test]
    fn test_mutations_write_through() {
        let storage = CountingStorage::default();
        let mut store = CartStore::open(storage);

        store.add_item(&product("a", "10"), VariantKey::default(), 1);
        store.add_item(&product("a", "10"), VariantKey::default(), 2);
        store.update_quantity(&ProductId::new("a"), &VariantKey::default(), 5);
        store.remove_item(&ProductId::new("a"), &VariantKey::default());

        assert_eq!(store.storage.saves.get(), 4);
    }

    #[test]
    fn test_noop_mutations_skip_persist() {
        let storage = CountingStorage::default();
        let mut store = CartStore::open(storage);
        store.add_item(&product("a", "10"), VariantKey::default(), 2);
        let saves_after_add = store.storage.saves.get();

        // Below-1 update, absent-line update, absent-line remove
        store.update_quantity(&ProductId::new("a"), &VariantKey::default(), 0);
        store.update_quantity(&ProductId::new("zzz"), &VariantKey::default(), 3);
        store.remove_item(&ProductId::new("zzz"), &VariantKey::default());

        assert_eq!(store.storage.saves.get(), saves_after_add);
        assert_eq!(store.total_count(), 2);
    }

    #[test]
    fn test_hydration_roundtrip() {
        let storage = MemoryStorage::new();
        {
            let mut store = CartStore::open(&storage);
            store.add_item(&product("a", "19.99"), VariantKey::new("M", "Black"), 2);
            store.add_item(&product("b", "5.00"), VariantKey::default(), 1);
        }

        let store = CartStore::open(&storage);
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.total_count(), 3);
        assert_eq!(store.total_price(), dec("44.98"));
    }

    #[test]
    fn test_corrupt_snapshot_fails_soft() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "]]] nonsense").unwrap();

        let store = CartStore::open(JsonFileStorage::new(path));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_unreadable_storage_fails_soft() {
        let mut store = CartStore::open(BrokenStorage);
        assert!(store.items().is_empty());

        // Mutations still work in memory even when every write fails
        store.add_item(&product("a", "10"), VariantKey::default(), 1);
        assert_eq!(store.total_count(), 1);
        store.clear();
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_clear_removes_snapshot_and_is_idempotent() {
        let storage = CountingStorage::default();
        let mut store = CartStore::open(storage);
        store.add_item(&product("a", "10"), VariantKey::default(), 1);
        assert!(store.storage.inner.snapshot().is_some());

        store.clear();
        assert!(store.items().is_empty());
        assert_eq!(store.storage.inner.snapshot(), None);
        assert_eq!(store.storage.inner.load().unwrap(), None);

        store.clear();
        assert!(store.items().is_empty());
        assert_eq!(store.storage.clears.get(), 2);
    }

    #[test]
    fn test_update_flag_set_on_add_and_reset_explicitly() {
        let mut store = CartStore::open(MemoryStorage::new());
        assert!(!store.recently_updated());

        store.add_item(&product("a", "10"), VariantKey::default(), 1);
        assert!(store.recently_updated());

        store.reset_update_flag();
        assert!(!store.recently_updated());

        // Remove/update do not set the flag; only adds announce themselves
        store.update_quantity(&ProductId::new("a"), &VariantKey::default(), 3);
        store.remove_item(&ProductId::new("a"), &VariantKey::default());
        assert!(!store.recently_updated());
    }
}
