use axum::{
    Extension,
    extract::{Path, State},
};
use recipehub_core::domain::pantry::ports::PantryService;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pantry::validators::SavedRecipesResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/saved-recipes/{recipe_id}",
    tag = "pantry",
    summary = "Save a recipe",
    description = "Saving an already saved recipe changes nothing.",
    params(
        ("recipe_id" = String, Path, description = "Upstream recipe id"),
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    responses(
        (status = 200, body = SavedRecipesResponse)
    )
)]
pub async fn save_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<SavedRecipesResponse>, ApiError> {
    let saved = state
        .service
        .save_recipe(device.scope(), recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SavedRecipesResponse { data: saved }))
}
