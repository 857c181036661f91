pub mod file;
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

use crate::domain::{
    common::{StorageConfig, entities::app_errors::CoreError},
    pantry::ports::KeyValueStore,
};

/// Store selected at startup from the storage configuration.
#[derive(Debug, Clone)]
pub enum KeyValueBackend {
    Memory(InMemoryKeyValueStore),
    File(FileKeyValueStore),
}

impl KeyValueBackend {
    pub async fn from_config(config: &StorageConfig) -> Result<Self, CoreError> {
        match &config.path {
            Some(path) => {
                tracing::info!("Using JSON file store at {}", path);
                Ok(KeyValueBackend::File(FileKeyValueStore::open(path).await?))
            }
            None => {
                tracing::info!("Using in-memory store, nothing will be persisted");
                Ok(KeyValueBackend::Memory(InMemoryKeyValueStore::default()))
            }
        }
    }
}

impl KeyValueStore for KeyValueBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        match self {
            KeyValueBackend::Memory(store) => store.get(key).await,
            KeyValueBackend::File(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        match self {
            KeyValueBackend::Memory(store) => store.set(key, value).await,
            KeyValueBackend::File(store) => store.set(key, value).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<(), CoreError> {
        match self {
            KeyValueBackend::Memory(store) => store.delete(key).await,
            KeyValueBackend::File(store) => store.delete(key).await,
        }
    }
}
