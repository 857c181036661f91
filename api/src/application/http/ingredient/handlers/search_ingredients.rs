use axum::extract::{Query, State};
use recipehub_core::domain::recipe::{entities::Ingredient, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    ingredient::validators::SearchIngredientsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "ingredient",
    summary = "Autocomplete ingredients",
    description = "Returns up to 10 ingredients. Queries shorter than 3 characters return an empty list.",
    params(SearchIngredientsQuery),
    responses(
        (status = 200, body = SearchIngredientsResponse),
        (status = 502, description = "Recipe API failure")
    )
)]
pub async fn search_ingredients(
    State(state): State<AppState>,
    Query(params): Query<SearchIngredientsQuery>,
) -> Result<Response<SearchIngredientsResponse>, ApiError> {
    params.validate()?;

    let ingredients = state
        .service
        .search_ingredients(params.query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchIngredientsResponse { data: ingredients }))
}
