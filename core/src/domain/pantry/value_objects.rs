use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Ingredient};

pub const MAX_RECENT_SEARCHES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Ingredients,
    Filters,
    SavedRecipes,
    RecentSearches,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Ingredients => "ingredients",
            StorageKey::Filters => "filters",
            StorageKey::SavedRecipes => "saved_recipes",
            StorageKey::RecentSearches => "recent_searches",
        }
    }
}

/// Whose pantry an operation touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryScope {
    pub device_id: String,
}

impl PantryScope {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
        }
    }

    pub fn key(&self, key: StorageKey) -> String {
        format!("{}:{}", self.device_id, key.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AddIngredientInput {
    /// Free text typed by the user
    Manual { name: String },
    /// Picked from autocomplete or a barcode scan
    Known { ingredient: Ingredient },
}

impl AddIngredientInput {
    pub fn into_ingredient(self) -> Result<Ingredient, CoreError> {
        match self {
            AddIngredientInput::Manual { name } => Ingredient::manual(&name),
            AddIngredientInput::Known { ingredient } => {
                if ingredient.id.trim().is_empty() || ingredient.name.trim().is_empty() {
                    return Err(CoreError::Invalid);
                }
                Ok(ingredient)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_per_device() {
        let scope = PantryScope::new("ipad-7");
        assert_eq!(scope.key(StorageKey::SavedRecipes), "ipad-7:saved_recipes");
        assert_eq!(scope.key(StorageKey::Filters), "ipad-7:filters");
    }

    #[test]
    fn add_input_is_tagged() {
        let input: AddIngredientInput =
            serde_json::from_str(r#"{ "type": "manual", "name": "basil" }"#).unwrap();
        assert_eq!(
            input,
            AddIngredientInput::Manual {
                name: "basil".to_string()
            }
        );
    }

    #[test]
    fn known_ingredients_need_an_id() {
        let input = AddIngredientInput::Known {
            ingredient: Ingredient::new("", "salt"),
        };
        assert_eq!(input.into_ingredient(), Err(CoreError::Invalid));
    }
}
