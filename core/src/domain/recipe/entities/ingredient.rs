use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
            quantity: None,
            unit: None,
        }
    }

    /// Ingredient typed in by the user. The id is synthesized and never empty.
    pub fn manual(name: &str) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Invalid);
        }

        Ok(Self::new(format!("manual-{}", generate_uuid_v7()), name))
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_ingredients_get_unique_ids() {
        let first = Ingredient::manual("  tomato ").unwrap();
        let second = Ingredient::manual("tomato").unwrap();

        assert_eq!(first.name, "tomato");
        assert!(first.id.starts_with("manual-"));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn manual_ingredient_requires_a_name() {
        assert_eq!(Ingredient::manual("   "), Err(CoreError::Invalid));
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(Ingredient::new("1", "egg")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "1", "name": "egg" }));
    }
}
