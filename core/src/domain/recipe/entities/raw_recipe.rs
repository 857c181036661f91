//! Records as returned by the upstream recipe API.
//!
//! Every field the upstream may omit is optional or defaulted so that a sparse
//! record still deserializes. Defaults are resolved by the normalizer, not here.

use serde::{Deserialize, Serialize};

pub const CALORIES_NUTRIENT: &str = "Calories";
pub const CARBOHYDRATES_NUTRIENT: &str = "Carbohydrates";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecipeRecord {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub preparation_minutes: Option<i64>,
    #[serde(default)]
    pub cooking_minutes: Option<i64>,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub dairy_free: bool,
    #[serde(default)]
    pub very_healthy: bool,
    #[serde(default)]
    pub very_popular: bool,
    #[serde(default)]
    pub whole30: bool,
    #[serde(default)]
    pub low_fodmap: bool,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub extended_ingredients: Vec<RawIngredient>,
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionGroup>,
    #[serde(default)]
    pub dish_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIngredient {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstructionGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstructionStep {
    #[serde(default)]
    pub number: u32,
    pub step: String,
}

/// One entry of the search-by-ingredients response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSearchHit {
    pub id: i64,
    #[serde(default)]
    pub used_ingredient_count: u32,
    #[serde(default)]
    pub missed_ingredient_count: u32,
}

impl RawRecipeRecord {
    pub fn nutrient_amount(&self, name: &str) -> Option<f64> {
        self.nutrition
            .as_ref()?
            .nutrients
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.amount)
    }

    pub fn calories(&self) -> Option<f64> {
        self.nutrient_amount(CALORIES_NUTRIENT)
    }

    pub fn carbohydrates(&self) -> Option<f64> {
        self.nutrient_amount(CARBOHYDRATES_NUTRIENT)
    }

    pub fn ingredient_count(&self) -> usize {
        self.extended_ingredients.len()
    }

    /// Steps of the first instruction group. Later groups are ignored.
    pub fn first_group_steps(&self) -> &[InstructionStep] {
        self.analyzed_instructions
            .first()
            .map(|group| group.steps.as_slice())
            .unwrap_or_default()
    }

    pub fn ready_in_minutes(&self) -> u32 {
        self.ready_in_minutes.unwrap_or(0)
    }
}
