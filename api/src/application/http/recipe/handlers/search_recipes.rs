use axum::{Extension, extract::State};
use recipehub_core::domain::{
    pantry::ports::PantryService,
    recipe::{entities::RecipeCard, ports::RecipeService, value_objects::SearchRecipesInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        recipe::validators::SearchRecipesValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchRecipesResponse {
    pub data: Vec<RecipeCard>,
    pub count: usize,
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "recipe",
    summary = "Search recipes by ingredients",
    description = "Finds recipes using the given ingredients, then filters them by diet, time, difficulty and calories. Results keep the upstream ranking.",
    request_body = SearchRecipesValidator,
    params(
        ("x-device-id" = Option<String>, Header, description = "Device whose stored filters apply when none are sent"),
    ),
    responses(
        (status = 200, body = SearchRecipesResponse),
        (status = 400, description = "Invalid filters"),
        (status = 502, description = "Recipe API failure")
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<SearchRecipesValidator>,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    let filters = match payload.filters {
        Some(filters) => filters,
        None => state
            .service
            .get_filters(device.scope())
            .await
            .map_err(ApiError::from)?,
    };

    let cards = state
        .service
        .search_recipes(SearchRecipesInput {
            ingredients: payload.ingredients,
            filters,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchRecipesResponse {
        count: cards.len(),
        data: cards,
    }))
}
