use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::instrument;
use url::Url;

use crate::domain::{
    common::{SpoonacularConfig, entities::app_errors::CoreError},
    recipe::{
        entities::{Ingredient, IngredientSearchHit, RawRecipeRecord},
        normalizer::ingredient_image_url,
        ports::RecipeProvider,
    },
};

/// Upstream ranking mode 2 minimizes missing ingredients.
const FIND_BY_INGREDIENTS_RANKING: &str = "2";
const INGREDIENT_SEARCH_RESULTS: &str = "10";

#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    api_key: String,
    base_url: Url,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct IngredientSearchResponse {
    #[serde(default)]
    results: Vec<IngredientResult>,
}

#[derive(Debug, Deserialize)]
struct IngredientResult {
    id: i64,
    name: String,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    id: i64,
    title: String,
    #[serde(default)]
    image: Option<String>,
}

impl SpoonacularClient {
    pub fn new(config: &SpoonacularConfig) -> Result<Self, CoreError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            tracing::error!("Invalid Spoonacular base url {}: {}", config.base_url, e);
            CoreError::InternalServerError
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url,
            client,
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::InternalServerError)?
            .pop_if_empty()
            .extend(path.split('/'));
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("apiKey", &self.api_key);

        Ok(url)
    }

    /// GETs a JSON document. An upstream 404 yields `None`; callers decide
    /// whether that means "no such resource" or a failed call.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, CoreError> {
        let url = self.endpoint(path, params)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Spoonacular request to {} failed: {}", path, e);
            CoreError::ExternalServiceError(format!("Recipe API error: {}", e))
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Spoonacular error on {}: {} - {}", path, status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Recipe API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json::<T>().await.map(Some).map_err(|e| {
            tracing::error!("Failed to parse Spoonacular response from {}: {}", path, e);
            CoreError::ExternalServiceError(format!("Failed to parse recipe API response: {}", e))
        })
    }
}

fn not_found_error(path: &str) -> CoreError {
    tracing::error!("Spoonacular returned 404 for {}", path);
    CoreError::ExternalServiceError(format!("Recipe API returned error: 404 Not Found on {path}"))
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl RecipeProvider for SpoonacularClient {
    #[instrument(skip(self))]
    async fn find_by_ingredients(
        &self,
        ingredient_names: Vec<String>,
        number: u32,
    ) -> Result<Vec<IngredientSearchHit>, CoreError> {
        let ingredients = ingredient_names.join(",");
        let number = number.to_string();
        let path = "recipes/findByIngredients";

        self.get_json::<Vec<IngredientSearchHit>>(
            path,
            &[
                ("ingredients", ingredients.as_str()),
                ("number", number.as_str()),
                ("ranking", FIND_BY_INGREDIENTS_RANKING),
                ("ignorePantry", "true"),
            ],
        )
        .await?
        .ok_or_else(|| not_found_error(path))
    }

    #[instrument(skip(self))]
    async fn get_information_bulk(
        &self,
        recipe_ids: Vec<i64>,
    ) -> Result<Vec<RawRecipeRecord>, CoreError> {
        let ids = join_ids(&recipe_ids);
        let path = "recipes/informationBulk";

        self.get_json::<Vec<RawRecipeRecord>>(
            path,
            &[("ids", ids.as_str()), ("includeNutrition", "true")],
        )
        .await?
        .ok_or_else(|| not_found_error(path))
    }

    #[instrument(skip(self))]
    async fn get_information(&self, recipe_id: i64) -> Result<RawRecipeRecord, CoreError> {
        let path = format!("recipes/{}/information", recipe_id);

        self.get_json::<RawRecipeRecord>(&path, &[("includeNutrition", "true")])
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn search_ingredients(&self, query: String) -> Result<Vec<Ingredient>, CoreError> {
        let path = "food/ingredients/search";

        let response = self
            .get_json::<IngredientSearchResponse>(
                path,
                &[
                    ("query", query.as_str()),
                    ("number", INGREDIENT_SEARCH_RESULTS),
                    ("metaInformation", "true"),
                ],
            )
            .await?
            .ok_or_else(|| not_found_error(path))?;

        Ok(response
            .results
            .into_iter()
            .map(|result| {
                Ingredient::new(result.id.to_string(), result.name)
                    .with_image_url(result.image.as_deref().map(ingredient_image_url))
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn get_product_by_upc(&self, upc: String) -> Result<Option<Ingredient>, CoreError> {
        let path = format!("food/products/upc/{}", upc);

        let product = self.get_json::<ProductResponse>(&path, &[]).await?;

        Ok(product.map(|product| {
            Ingredient::new(product.id.to_string(), product.title).with_image_url(product.image)
        }))
    }
}
