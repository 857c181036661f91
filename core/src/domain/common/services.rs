use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{pantry::ports::KeyValueStore, recipe::ports::RecipeProvider};

/// Holds the adapters every domain service is implemented against.
pub struct Service<RP, KV>
where
    RP: RecipeProvider,
    KV: KeyValueStore,
{
    pub(crate) recipe_provider: Arc<RP>,
    pub(crate) key_value_store: Arc<KV>,
    pub(crate) result_count: u32,
    /// Serializes pantry read-modify-write cycles.
    pub(crate) pantry_writes: Arc<Mutex<()>>,
}

impl<RP, KV> Service<RP, KV>
where
    RP: RecipeProvider,
    KV: KeyValueStore,
{
    pub fn new(recipe_provider: RP, key_value_store: KV, result_count: u32) -> Self {
        Self {
            recipe_provider: Arc::new(recipe_provider),
            key_value_store: Arc::new(key_value_store),
            result_count,
            pantry_writes: Arc::new(Mutex::new(())),
        }
    }
}

impl<RP, KV> Clone for Service<RP, KV>
where
    RP: RecipeProvider,
    KV: KeyValueStore,
{
    fn clone(&self) -> Self {
        Self {
            recipe_provider: Arc::clone(&self.recipe_provider),
            key_value_store: Arc::clone(&self.key_value_store),
            result_count: self.result_count,
            pantry_writes: Arc::clone(&self.pantry_writes),
        }
    }
}
