use axum::{
    Extension,
    extract::{Path, State},
};
use recipehub_core::domain::pantry::ports::PantryService;
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
#[serde(rename_all = "camelCase")]
pub struct SavedRecipeStatusResponse {
    pub recipe_id: String,
    pub saved: bool,
}

#[utoipa::path(
    get,
    path = "/saved-recipes/{recipe_id}",
    tag = "pantry",
    summary = "Check whether a recipe is saved",
    params(
        ("recipe_id" = String, Path, description = "Upstream recipe id"),
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    responses(
        (status = 200, body = SavedRecipeStatusResponse)
    )
)]
pub async fn get_saved_recipe_status(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<SavedRecipeStatusResponse>, ApiError> {
    let saved = state
        .service
        .is_recipe_saved(device.scope(), recipe_id.clone())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SavedRecipeStatusResponse { recipe_id, saved }))
}
