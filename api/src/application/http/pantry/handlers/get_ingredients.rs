use axum::{Extension, extract::State};
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
    get,
    path = "/ingredients",
    tag = "pantry",
    summary = "List pantry ingredients",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    responses(
        (status = 200, body = PantryIngredientsResponse)
    )
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<PantryIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .get_ingredients(device.scope())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PantryIngredientsResponse { data: ingredients }))
}
