//! Key/value store port.
//!
//! Draft fields are persisted in a flat, string-valued store that survives
//! restarts. The store is shared: nothing coordinates two composers writing
//! to the same backing store, and the last write wins.

use thiserror::Error;

/// Errors surfaced by a key/value store adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt store data: {0}")]
    Corrupt(String),
}

/// Port for a string-valued key/value store.
///
/// Writes are synchronous: when `set` returns `Ok`, a following `get` for the
/// same key observes the new value.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
