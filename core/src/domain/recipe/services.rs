use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    pantry::ports::KeyValueStore,
    recipe::{
        entities::{Ingredient, RecipeCard, RecipeDetail},
        normalizer::{build_recipe_cards, to_recipe_detail},
        ports::{RecipeProvider, RecipeService},
        value_objects::{GetRecipeInput, SearchRecipesInput},
    },
};

/// Autocomplete only kicks in from this many characters.
pub const MIN_INGREDIENT_QUERY_LEN: usize = 3;

pub(crate) fn parse_recipe_id(recipe_id: &str) -> Result<i64, CoreError> {
    recipe_id.trim().parse::<i64>().map_err(|_| CoreError::Invalid)
}

impl<RP, KV> RecipeService for Service<RP, KV>
where
    RP: RecipeProvider,
    KV: KeyValueStore,
{
    #[instrument(skip(self, input), fields(ingredients = input.ingredients.len()))]
    async fn search_recipes(&self, input: SearchRecipesInput) -> Result<Vec<RecipeCard>, CoreError> {
        input.filters.validate()?;

        let names: Vec<String> = input
            .ingredients
            .iter()
            .map(|ingredient| ingredient.name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return Ok(Vec::new());
        }

        // 1. Search by ingredients
        let hits = self
            .recipe_provider
            .find_by_ingredients(names, self.result_count)
            .await?;

        if hits.is_empty() {
            return Ok(Vec::new());
        }

        // 2. Fetch full records for filtering
        let ids = hits.iter().map(|hit| hit.id).collect();
        let records = self.recipe_provider.get_information_bulk(ids).await?;

        // 3. Filter, join match counts and rank
        let cards = build_recipe_cards(&hits, &records, &input.filters);

        tracing::debug!(
            hits = hits.len(),
            records = records.len(),
            cards = cards.len(),
            "recipe search completed"
        );

        Ok(cards)
    }

    #[instrument(skip(self), fields(recipe_id = %input.recipe_id))]
    async fn get_recipe(&self, input: GetRecipeInput) -> Result<RecipeDetail, CoreError> {
        let recipe_id = parse_recipe_id(&input.recipe_id)?;
        let record = self.recipe_provider.get_information(recipe_id).await?;

        Ok(to_recipe_detail(&record))
    }

    #[instrument(skip(self))]
    async fn get_recipes(&self, recipe_ids: Vec<String>) -> Result<Vec<RecipeDetail>, CoreError> {
        let ids = recipe_ids
            .iter()
            .map(|id| parse_recipe_id(id))
            .collect::<Result<Vec<_>, _>>()?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let records = self.recipe_provider.get_information_bulk(ids).await?;

        Ok(records.iter().map(to_recipe_detail).collect())
    }

    #[instrument(skip(self))]
    async fn search_ingredients(&self, query: String) -> Result<Vec<Ingredient>, CoreError> {
        let query = query.trim();
        if query.chars().count() < MIN_INGREDIENT_QUERY_LEN {
            return Ok(Vec::new());
        }

        self.recipe_provider
            .search_ingredients(query.to_string())
            .await
    }

    #[instrument(skip(self))]
    async fn get_ingredient_by_barcode(&self, upc: String) -> Result<Option<Ingredient>, CoreError> {
        let upc = upc.trim();
        if upc.is_empty() || !upc.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::Invalid);
        }

        self.recipe_provider.get_product_by_upc(upc.to_string()).await
    }
}
