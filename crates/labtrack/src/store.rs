//! Record store trait and the in-memory backend.
//!
//! The query engine never touches storage. A [`RecordStore`] hands it a
//! fully materialized collection: every navigation reference that a field
//! table reads must already be populated on the records it returns.
//!
//! # Example
//!
//! ```rust
//! use labtrack::{MemoryStore, Product, RecordStore};
//!
//! let store = MemoryStore::new();
//! store.insert(Product::new(1, "Resin A", "RA-1")).unwrap();
//! store.insert(Product::new(2, "Resin B", "RB-1")).unwrap();
//!
//! let all = store.fetch_all().unwrap();
//! assert_eq!(all.len(), 2);
//! assert_eq!(all[0].name, "Resin A");
//! ```

use std::sync::RwLock;

use thiserror::Error;

/// Errors raised by the in-memory store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock.
    #[error("record store lock poisoned")]
    Poisoned,
}

/// Trait for storage backends that feed the list operations.
///
/// # Design Notes
///
/// - **Sync-only**: This trait is synchronous. An async backend should
///   resolve its fetch before handing records to the engine.
///
/// - **Eager relations**: `fetch_all` returns records with their navigation
///   references loaded. The engine treats an unset reference as null.
///
/// - **Natural order**: the order `fetch_all` returns is the order a list
///   keeps when no sort key is recognized.
pub trait RecordStore: Send + Sync {
    /// The entity type.
    type Item;

    /// The error type for storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns every record, relations populated, in natural order.
    fn fetch_all(&self) -> Result<Vec<Self::Item>, Self::Error>;
}

/// A store backed by a vector; insertion order is natural order.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        MemoryStore {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T> MemoryStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records` in the given order.
    pub fn with_records(records: Vec<T>) -> Self {
        MemoryStore {
            records: RwLock::new(records),
        }
    }

    /// Appends one record.
    pub fn insert(&self, record: T) -> Result<(), StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .push(record);
        Ok(())
    }

    /// Appends several records, keeping their order.
    pub fn extend(&self, records: impl IntoIterator<Item = T>) -> Result<(), StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .extend(records);
        Ok(())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl<T> RecordStore for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;
    type Error = StoreError;

    fn fetch_all(&self) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }
}
