use std::sync::Mutex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{
            Ingredient, IngredientSearchHit, InstructionGroup, InstructionStep, Nutrient,
            Nutrition, RawIngredient, RawRecipeRecord,
        },
        ports::RecipeProvider,
    },
};

pub struct RecordBuilder {
    record: RawRecipeRecord,
}

impl RecordBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            record: RawRecipeRecord {
                id,
                title: format!("Recipe {id}"),
                image: Some(format!("https://img.example/{id}.jpg")),
                ..RawRecipeRecord::default()
            },
        }
    }

    pub fn ready_in(mut self, minutes: u32) -> Self {
        self.record.ready_in_minutes = Some(minutes);
        self
    }

    fn nutrient(mut self, name: &str, amount: f64) -> Self {
        self.record
            .nutrition
            .get_or_insert_with(Nutrition::default)
            .nutrients
            .push(Nutrient {
                name: name.to_string(),
                amount,
                unit: String::new(),
            });
        self
    }

    pub fn calories(self, amount: f64) -> Self {
        self.nutrient("Calories", amount)
    }

    pub fn carbohydrates(self, grams: f64) -> Self {
        self.nutrient("Carbohydrates", grams)
    }

    pub fn vegan(mut self) -> Self {
        self.record.vegan = true;
        self
    }

    pub fn vegetarian(mut self) -> Self {
        self.record.vegetarian = true;
        self
    }

    pub fn low_fodmap(mut self) -> Self {
        self.record.low_fodmap = true;
        self
    }

    pub fn very_healthy(mut self) -> Self {
        self.record.very_healthy = true;
        self
    }

    pub fn very_popular(mut self) -> Self {
        self.record.very_popular = true;
        self
    }

    pub fn whole30(mut self) -> Self {
        self.record.whole30 = true;
        self
    }

    pub fn build(self) -> RawRecipeRecord {
        self.record
    }
}

pub fn record_with_counts(id: i64, ingredients: usize, steps: usize) -> RawRecipeRecord {
    let mut record = RecordBuilder::new(id).build();
    record.extended_ingredients = (0..ingredients)
        .map(|n| RawIngredient {
            id: Some(n as i64),
            name: format!("ingredient {n}"),
            ..RawIngredient::default()
        })
        .collect();
    if steps > 0 {
        record.analyzed_instructions = vec![InstructionGroup {
            name: String::new(),
            steps: (0..steps)
                .map(|n| InstructionStep {
                    number: n as u32 + 1,
                    step: format!("step {n}"),
                })
                .collect(),
        }];
    }
    record
}

pub fn hit(id: i64, used: u32) -> IngredientSearchHit {
    IngredientSearchHit {
        id,
        used_ingredient_count: used,
        missed_ingredient_count: 0,
    }
}

/// Canned upstream that records which calls were made.
#[derive(Default)]
pub struct FakeRecipeProvider {
    pub hits: Vec<IngredientSearchHit>,
    pub records: Vec<RawRecipeRecord>,
    pub ingredients: Vec<Ingredient>,
    pub product: Option<Ingredient>,
    pub failure: Option<CoreError>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeRecipeProvider {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record_call(&self, call: String) -> Result<(), CoreError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl RecipeProvider for FakeRecipeProvider {
    async fn find_by_ingredients(
        &self,
        ingredient_names: Vec<String>,
        number: u32,
    ) -> Result<Vec<IngredientSearchHit>, CoreError> {
        self.record_call(format!("find_by_ingredients:{}:{number}", ingredient_names.join(",")))?;
        Ok(self.hits.clone())
    }

    async fn get_information_bulk(
        &self,
        recipe_ids: Vec<i64>,
    ) -> Result<Vec<RawRecipeRecord>, CoreError> {
        let ids: Vec<String> = recipe_ids.iter().map(|id| id.to_string()).collect();
        self.record_call(format!("get_information_bulk:{}", ids.join(",")))?;
        Ok(self
            .records
            .iter()
            .filter(|r| recipe_ids.contains(&r.id))
            .cloned()
            .collect())
    }

    async fn get_information(&self, recipe_id: i64) -> Result<RawRecipeRecord, CoreError> {
        self.record_call(format!("get_information:{recipe_id}"))?;
        self.records
            .iter()
            .find(|r| r.id == recipe_id)
            .cloned()
            .ok_or(CoreError::NotFound)
    }

    async fn search_ingredients(&self, query: String) -> Result<Vec<Ingredient>, CoreError> {
        self.record_call(format!("search_ingredients:{query}"))?;
        Ok(self.ingredients.clone())
    }

    async fn get_product_by_upc(&self, upc: String) -> Result<Option<Ingredient>, CoreError> {
        self.record_call(format!("get_product_by_upc:{upc}"))?;
        Ok(self.product.clone())
    }
}
