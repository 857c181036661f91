use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::RwLock;

use crate::domain::{common::entities::app_errors::CoreError, pantry::ports::KeyValueStore};

/// Key-value store persisted as one flat JSON object.
///
/// The whole map is kept in memory and rewritten on every mutation. Writes go
/// to a sibling temp file first and are renamed over the target.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

fn storage_error(action: &str, path: &Path, e: impl std::fmt::Display) -> CoreError {
    tracing::error!("Failed to {} {}: {}", action, path.display(), e);
    CoreError::StorageError(format!("failed to {} {}: {}", action, path.display(), e))
}

impl FileKeyValueStore {
    /// Opens the store, starting empty when the file does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| storage_error("parse", &path, e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(storage_error("read", &path, e)),
        };

        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("create directory for", &self.path, e))?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, content)
            .await
            .map_err(|e| storage_error("write", &tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| storage_error("replace", &self.path, e))
    }
}

impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        self.persist(&entries).await
    }

    async fn delete(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&entries).await
    }
}
