use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    pantry::{
        ports::{KeyValueStore, PantryService},
        value_objects::{AddIngredientInput, MAX_RECENT_SEARCHES, PantryScope, StorageKey},
    },
    recipe::{
        entities::Ingredient,
        ports::RecipeProvider,
        services::parse_recipe_id,
        value_objects::{DietaryPreference, RecipeFilters},
    },
};

impl<RP, KV> Service<RP, KV>
where
    RP: RecipeProvider,
    KV: KeyValueStore,
{
    async fn load<T: DeserializeOwned>(
        &self,
        scope: &PantryScope,
        key: StorageKey,
    ) -> Result<Option<T>, CoreError> {
        let key = scope.key(key);
        let Some(raw) = self.key_value_store.get(&key).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            tracing::error!("Corrupt value stored under {}: {}", key, e);
            CoreError::StorageError(format!("corrupt value under {key}: {e}"))
        })
    }

    async fn store<T: Serialize>(
        &self,
        scope: &PantryScope,
        key: StorageKey,
        value: &T,
    ) -> Result<(), CoreError> {
        let raw = serde_json::to_string(value)?;
        self.key_value_store.set(&scope.key(key), raw).await
    }
}

impl<RP, KV> PantryService for Service<RP, KV>
where
    RP: RecipeProvider,
    KV: KeyValueStore,
{
    #[instrument(skip(self))]
    async fn get_ingredients(&self, scope: PantryScope) -> Result<Vec<Ingredient>, CoreError> {
        Ok(self
            .load(&scope, StorageKey::Ingredients)
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self, ingredients), fields(count = ingredients.len()))]
    async fn set_ingredients(
        &self,
        scope: PantryScope,
        ingredients: Vec<Ingredient>,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let mut unique: Vec<Ingredient> = Vec::with_capacity(ingredients.len());
        for ingredient in ingredients {
            if !unique.iter().any(|i| i.id == ingredient.id) {
                unique.push(ingredient);
            }
        }

        let _guard = self.pantry_writes.lock().await;
        self.store(&scope, StorageKey::Ingredients, &unique).await?;
        Ok(unique)
    }

    #[instrument(skip(self))]
    async fn add_ingredient(
        &self,
        scope: PantryScope,
        input: AddIngredientInput,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let ingredient = input.into_ingredient()?;
        let _guard = self.pantry_writes.lock().await;
        let mut ingredients = self.get_ingredients(scope.clone()).await?;

        if ingredients.iter().any(|i| i.id == ingredient.id) {
            return Ok(ingredients);
        }

        ingredients.push(ingredient);
        self.store(&scope, StorageKey::Ingredients, &ingredients)
            .await?;
        Ok(ingredients)
    }

    #[instrument(skip(self))]
    async fn remove_ingredient(
        &self,
        scope: PantryScope,
        ingredient_id: String,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let _guard = self.pantry_writes.lock().await;
        let mut ingredients = self.get_ingredients(scope.clone()).await?;
        ingredients.retain(|i| i.id != ingredient_id);

        self.store(&scope, StorageKey::Ingredients, &ingredients)
            .await?;
        Ok(ingredients)
    }

    #[instrument(skip(self))]
    async fn clear_ingredients(&self, scope: PantryScope) -> Result<(), CoreError> {
        let _guard = self.pantry_writes.lock().await;
        self.key_value_store
            .delete(&scope.key(StorageKey::Ingredients))
            .await
    }

    #[instrument(skip(self))]
    async fn get_filters(&self, scope: PantryScope) -> Result<RecipeFilters, CoreError> {
        Ok(self
            .load(&scope, StorageKey::Filters)
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn set_filters(
        &self,
        scope: PantryScope,
        filters: RecipeFilters,
    ) -> Result<RecipeFilters, CoreError> {
        filters.validate()?;
        let _guard = self.pantry_writes.lock().await;
        self.store(&scope, StorageKey::Filters, &filters).await?;
        Ok(filters)
    }

    #[instrument(skip(self))]
    async fn toggle_dietary_preference(
        &self,
        scope: PantryScope,
        preference: DietaryPreference,
    ) -> Result<RecipeFilters, CoreError> {
        let _guard = self.pantry_writes.lock().await;
        let mut filters = self.get_filters(scope.clone()).await?;
        filters.dietary_preferences.toggle(preference);

        self.store(&scope, StorageKey::Filters, &filters).await?;
        Ok(filters)
    }

    #[instrument(skip(self))]
    async fn get_saved_recipes(&self, scope: PantryScope) -> Result<Vec<String>, CoreError> {
        Ok(self
            .load(&scope, StorageKey::SavedRecipes)
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn save_recipe(
        &self,
        scope: PantryScope,
        recipe_id: String,
    ) -> Result<Vec<String>, CoreError> {
        let recipe_id = parse_recipe_id(&recipe_id)?.to_string();

        let _guard = self.pantry_writes.lock().await;
        let mut saved = self.get_saved_recipes(scope.clone()).await?;
        if saved.contains(&recipe_id) {
            return Ok(saved);
        }

        saved.push(recipe_id);
        self.store(&scope, StorageKey::SavedRecipes, &saved).await?;
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn remove_saved_recipe(
        &self,
        scope: PantryScope,
        recipe_id: String,
    ) -> Result<Vec<String>, CoreError> {
        let _guard = self.pantry_writes.lock().await;
        let mut saved = self.get_saved_recipes(scope.clone()).await?;
        saved.retain(|id| id != &recipe_id);

        self.store(&scope, StorageKey::SavedRecipes, &saved).await?;
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn is_recipe_saved(
        &self,
        scope: PantryScope,
        recipe_id: String,
    ) -> Result<bool, CoreError> {
        let saved = self.get_saved_recipes(scope).await?;
        Ok(saved.contains(&recipe_id))
    }

    #[instrument(skip(self))]
    async fn get_recent_searches(&self, scope: PantryScope) -> Result<Vec<String>, CoreError> {
        Ok(self
            .load(&scope, StorageKey::RecentSearches)
            .await?
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn push_recent_search(
        &self,
        scope: PantryScope,
        query: String,
    ) -> Result<Vec<String>, CoreError> {
        let query = query.trim().to_string();
        if query.is_empty() {
            return Err(CoreError::Invalid);
        }

        let _guard = self.pantry_writes.lock().await;
        let previous = self.get_recent_searches(scope.clone()).await?;
        let searches: Vec<String> = std::iter::once(query.clone())
            .chain(previous.into_iter().filter(|q| q != &query))
            .take(MAX_RECENT_SEARCHES)
            .collect();

        self.store(&scope, StorageKey::RecentSearches, &searches)
            .await?;
        Ok(searches)
    }

    #[instrument(skip(self))]
    async fn clear_recent_searches(&self, scope: PantryScope) -> Result<(), CoreError> {
        let _guard = self.pantry_writes.lock().await;
        self.key_value_store
            .delete(&scope.key(StorageKey::RecentSearches))
            .await
    }
}
