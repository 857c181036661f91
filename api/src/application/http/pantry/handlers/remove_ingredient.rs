use axum::{
    Extension,
    extract::{Path, State},
};
use recipehub_core::domain::pantry::ports::PantryService;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pantry::validators::PantryIngredientsResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    delete,
    path = "/ingredients/{ingredient_id}",
    tag = "pantry",
    summary = "Remove an ingredient",
    params(
        ("ingredient_id" = String, Path, description = "Ingredient id"),
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    responses(
        (status = 200, body = PantryIngredientsResponse)
    )
)]
pub async fn remove_ingredient(
    Path(ingredient_id): Path<String>,
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<PantryIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .remove_ingredient(device.scope(), ingredient_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PantryIngredientsResponse { data: ingredients }))
}
