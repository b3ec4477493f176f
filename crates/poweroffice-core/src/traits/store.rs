//! Durable key-value contract a [`Session`](crate::Session) persists through.

use crate::error::StoreError;

/// A string key-value store backing a session.
///
/// Implementations must make `put_many` visible as a single update where the
/// backend allows it; the default falls back to sequential puts.
pub trait SessionStore: Send + Sync {
    /// Read a value, returning `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a single value.
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Write several values together.
    fn put_many(&self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.put(key, value)?;
        }
        Ok(())
    }

    /// Delete every key starting with `prefix`.
    fn delete_all_with_prefix(&self, prefix: &str) -> Result<(), StoreError>;
}
