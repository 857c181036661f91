use recipehub_core::domain::{
    pantry::value_objects::AddIngredientInput,
    recipe::{entities::Ingredient, value_objects::RecipeFilters},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetIngredientsValidator {
    #[validate(length(max = 200, message = "too many ingredients"))]
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddIngredientValidator {
    #[serde(flatten)]
    pub input: AddIngredientInput,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetFiltersValidator {
    #[serde(flatten)]
    pub filters: RecipeFilters,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddRecentSearchValidator {
    #[validate(length(min = 1, max = 200, message = "query must be 1 to 200 characters"))]
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PantryIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FiltersResponse {
    pub data: RecipeFilters,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SavedRecipesResponse {
    pub data: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecentSearchesResponse {
    pub data: Vec<String>,
}
