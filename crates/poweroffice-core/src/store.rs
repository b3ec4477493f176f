//! In-memory session store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::StoreError;
use crate::traits::SessionStore;

/// A session store that lives only as long as the process.
///
/// Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend {
        message: "memory store lock poisoned".to_string(),
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let data = self.data.read().map_err(|_| poisoned())?;
        Ok(data.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut data = self.data.write().map_err(|_| poisoned())?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn put_many(&self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        let mut data = self.data.write().map_err(|_| poisoned())?;
        for (key, value) in entries {
            data.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn delete_all_with_prefix(&self, prefix: &str) -> Result<(), StoreError> {
        let mut data = self.data.write().map_err(|_| poisoned())?;
        data.retain(|key, _| !key.starts_with(prefix));
        Ok(())
    }
}
