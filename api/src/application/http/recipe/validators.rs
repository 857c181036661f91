use recipehub_core::domain::recipe::{entities::Ingredient, value_objects::RecipeFilters};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchRecipesValidator {
    #[validate(length(max = 50, message = "too many ingredients"))]
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Falls back to the filters stored for the device when omitted.
    #[serde(default)]
    pub filters: Option<RecipeFilters>,
}
