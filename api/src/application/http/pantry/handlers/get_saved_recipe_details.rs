use axum::{Extension, extract::State};
use recipehub_core::domain::{
    pantry::ports::PantryService,
    recipe::{entities::RecipeDetail, ports::RecipeService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SavedRecipeDetailsResponse {
    pub data: Vec<RecipeDetail>,
}

#[utoipa::path(
    get,
    path = "/saved-recipes/details",
    tag = "pantry",
    summary = "Fetch saved recipes",
    description = "Loads the full detail of every saved recipe in one upstream call.",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    responses(
        (status = 200, body = SavedRecipeDetailsResponse),
        (status = 502, description = "Recipe API failure")
    )
)]
pub async fn get_saved_recipe_details(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<SavedRecipeDetailsResponse>, ApiError> {
    let saved = state
        .service
        .get_saved_recipes(device.scope())
        .await
        .map_err(ApiError::from)?;

    let recipes = state
        .service
        .get_recipes(saved)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SavedRecipeDetailsResponse { data: recipes }))
}
