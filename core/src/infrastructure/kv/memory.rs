use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{common::entities::app_errors::CoreError, pantry::ports::KeyValueStore};

#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
