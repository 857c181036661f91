use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod fixtures;

#[derive(Clone, Debug)]
pub struct RecipeHubConfig {
    pub spoonacular: SpoonacularConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct SpoonacularConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Number of recipes requested from the ingredient search.
    pub result_count: u32,
}

#[derive(Clone, Debug, Default)]
pub struct StorageConfig {
    /// JSON file backing the key-value store. `None` keeps everything in memory.
    pub path: Option<String>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
