//! Durable snapshot storage for the cart.
//!
//! The cart persists as a single fixed key holding a JSON array of
//! line-item records. [`CartStorage::load`] distinguishes an absent key
//! (`None`) from an empty list so callers can tell whether a snapshot
//! was ever written; [`CartStorage::clear`] removes the key entirely
//! rather than writing an empty list.
//!
//! If multiple processes write through the same key, last-write-wins is
//! the only guarantee. There is no locking or merge protocol.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use amiya_core::LineItem;

/// Errors from the snapshot storage boundary.
///
/// These never escape cart mutations; the store absorbs them fail-soft
/// and logs. They surface only to callers using a storage directly.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot did not serialize or parse.
    #[error("Snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// The durable key-value boundary the cart persists through.
pub trait CartStorage {
    /// Write the full item collection under the fixed key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the snapshot cannot be written.
    fn save(&self, items: &[LineItem]) -> Result<(), StorageError>;

    /// Read the item collection, or `None` when no snapshot exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when a snapshot exists but cannot be
    /// read or parsed.
    fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError>;

    /// Remove the key entirely. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when removal fails for another reason.
    fn clear(&self) -> Result<(), StorageError>;
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        (**self).save(items)
    }

    fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
        (**self).load()
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

// =============================================================================
// JsonFileStorage
// =============================================================================

/// Snapshot storage backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage writing to the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let items = serde_json::from_str(&json)?;
        Ok(Some(items))
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-memory snapshot storage for tests and ephemeral sessions.
///
/// Round-trips through JSON like the file storage so serialization
/// behavior is exercised either way.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Create an empty storage (no snapshot present).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw persisted snapshot, if one exists.
    #[must_use]
    pub fn snapshot(&self) -> Option<String> {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CartStorage for MemoryStorage {
    fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items)?;
        *self.data.lock().unwrap_or_else(PoisonError::into_inner) = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
        let guard = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.data.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amiya_core::{ProductId, VariantKey};
    use rust_decimal::Decimal;

    fn item(id: &str, quantity: u32) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            name: format!("Product {id}"),
            unit_price: Decimal::new(1999, 2),
            image: None,
            variant: VariantKey::new("M", "Black"),
            quantity,
        }
    }

    #[test]
    fn test_memory_roundtrip() {
        let storage = MemoryStorage::new();
        let items = vec![item("a", 2), item("b", 1)];

        storage.save(&items).unwrap();
        assert_eq!(storage.load().unwrap(), Some(items));
    }

    #[test]
    fn test_memory_absent_loads_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_memory_clear_removes_key() {
        let storage = MemoryStorage::new();
        storage.save(&[item("a", 1)]).unwrap();

        storage.clear().unwrap();
        assert_eq!(storage.snapshot(), None);
        assert_eq!(storage.load().unwrap(), None);
        // Clearing again is fine
        storage.clear().unwrap();
    }

    #[test]
    fn test_memory_empty_list_is_not_absent() {
        let storage = MemoryStorage::new();
        storage.save(&[]).unwrap();
        assert_eq!(storage.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart.json"));
        let items = vec![item("a", 3)];

        storage.save(&items).unwrap();
        assert_eq!(storage.load().unwrap(), Some(items));
    }

    #[test]
    fn test_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested/data/cart.json"));

        storage.save(&[item("a", 1)]).unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_file_absent_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart.json"));
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_file_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart.json"));
        storage.save(&[item("a", 1)]).unwrap();

        storage.clear().unwrap();
        assert!(!storage.path().exists());
        storage.clear().unwrap();
    }

    #[test]
    fn test_file_corrupt_snapshot_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(matches!(storage.load(), Err(StorageError::Encoding(_))));
    }

    #[test]
    fn test_persisted_layout_field_names() {
        let storage = MemoryStorage::new();
        storage.save(&[item("a", 2)]).unwrap();

        let raw = storage.snapshot().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let line = &value[0];
        assert_eq!(line["id"], "a");
        assert_eq!(line["selectedSize"], "M");
        assert_eq!(line["selectedColor"], "Black");
        assert_eq!(line["quantity"], 2);
        assert!(line.get("name").is_some());
        assert!(line.get("price").is_some());
    }
}
