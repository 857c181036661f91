use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Difficulty, Ingredient};

/// Derived dietary facets. These are heuristics over upstream flags, not
/// certifications: keto, paleo and low-carb in particular are approximations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietaryInfo {
    pub is_vegan: bool,
    pub is_vegetarian: bool,
    pub is_gluten_free: bool,
    pub is_dairy_free: bool,
    pub is_keto: bool,
    pub is_paleo: bool,
    pub is_low_carb: bool,
}

/// Detail-view projection of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub time_to_cook: u32,
    pub prep_time: u32,
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub calories_per_serving: f64,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub dietary_info: DietaryInfo,
}
