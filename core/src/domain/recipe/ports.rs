use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Ingredient, IngredientSearchHit, RawRecipeRecord, RecipeCard, RecipeDetail},
        value_objects::{GetRecipeInput, SearchRecipesInput},
    },
};

/// Upstream recipe data source
#[cfg_attr(test, mockall::automock)]
pub trait RecipeProvider: Send + Sync {
    /// Recipes using the given ingredients, best matches first
    fn find_by_ingredients(
        &self,
        ingredient_names: Vec<String>,
        number: u32,
    ) -> impl Future<Output = Result<Vec<IngredientSearchHit>, CoreError>> + Send;

    /// Full records, nutrition included, for a batch of recipe ids
    fn get_information_bulk(
        &self,
        recipe_ids: Vec<i64>,
    ) -> impl Future<Output = Result<Vec<RawRecipeRecord>, CoreError>> + Send;

    fn get_information(
        &self,
        recipe_id: i64,
    ) -> impl Future<Output = Result<RawRecipeRecord, CoreError>> + Send;

    /// Ingredient autocomplete
    fn search_ingredients(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Grocery product lookup by UPC; `None` when the code is unknown
    fn get_product_by_upc(
        &self,
        upc: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;
}

/// Service trait for recipe discovery
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn search_recipes(
        &self,
        input: SearchRecipesInput,
    ) -> impl Future<Output = Result<Vec<RecipeCard>, CoreError>> + Send;

    fn get_recipe(
        &self,
        input: GetRecipeInput,
    ) -> impl Future<Output = Result<RecipeDetail, CoreError>> + Send;

    fn get_recipes(
        &self,
        recipe_ids: Vec<String>,
    ) -> impl Future<Output = Result<Vec<RecipeDetail>, CoreError>> + Send;

    fn search_ingredients(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_ingredient_by_barcode(
        &self,
        upc: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;
}
