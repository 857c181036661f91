use axum::extract::{Path, State};
use recipehub_core::domain::recipe::{
    entities::RecipeDetail, ports::RecipeService, value_objects::GetRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeResponse {
    pub data: RecipeDetail,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe detail",
    params(
        ("recipe_id" = String, Path, description = "Upstream recipe id"),
    ),
    responses(
        (status = 200, body = GetRecipeResponse),
        (status = 400, description = "Recipe id is not numeric"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(GetRecipeInput { recipe_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse { data: recipe }))
}
