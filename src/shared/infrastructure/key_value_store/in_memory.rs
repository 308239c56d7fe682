// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Support store tests and local development without device storage.
//
// Responsibilities
// - Keep values in a map keyed by string.
// - Simulate an unavailable backend when toggled offline.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, StorageError};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    inner: RwLock<HashMap<String, String>>,
    offline: bool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.offline {
            return Err(StorageError::Backend("storage offline".into()));
        }
        let guard = self.inner.read().await;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.offline {
            return Err(StorageError::Backend("storage offline".into()));
        }
        let mut guard = self.inner.write().await;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
