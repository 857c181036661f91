use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pantry::value_objects::{AddIngredientInput, PantryScope},
    recipe::{
        entities::Ingredient,
        value_objects::{DietaryPreference, RecipeFilters},
    },
};

/// String key-value persistence. Values are JSON documents.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for the per-device pantry: ingredients on hand, filters,
/// saved recipes and recent searches.
#[cfg_attr(test, mockall::automock)]
pub trait PantryService: Send + Sync {
    fn get_ingredients(
        &self,
        scope: PantryScope,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn set_ingredients(
        &self,
        scope: PantryScope,
        ingredients: Vec<Ingredient>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn add_ingredient(
        &self,
        scope: PantryScope,
        input: AddIngredientInput,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn remove_ingredient(
        &self,
        scope: PantryScope,
        ingredient_id: String,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn clear_ingredients(
        &self,
        scope: PantryScope,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_filters(
        &self,
        scope: PantryScope,
    ) -> impl Future<Output = Result<RecipeFilters, CoreError>> + Send;

    fn set_filters(
        &self,
        scope: PantryScope,
        filters: RecipeFilters,
    ) -> impl Future<Output = Result<RecipeFilters, CoreError>> + Send;

    fn toggle_dietary_preference(
        &self,
        scope: PantryScope,
        preference: DietaryPreference,
    ) -> impl Future<Output = Result<RecipeFilters, CoreError>> + Send;

    fn get_saved_recipes(
        &self,
        scope: PantryScope,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn save_recipe(
        &self,
        scope: PantryScope,
        recipe_id: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn remove_saved_recipe(
        &self,
        scope: PantryScope,
        recipe_id: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn is_recipe_saved(
        &self,
        scope: PantryScope,
        recipe_id: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn get_recent_searches(
        &self,
        scope: PantryScope,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn push_recent_search(
        &self,
        scope: PantryScope,
        query: String,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn clear_recent_searches(
        &self,
        scope: PantryScope,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
