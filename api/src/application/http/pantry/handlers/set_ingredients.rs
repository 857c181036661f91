use axum::{Extension, extract::State};
use recipehub_core::domain::pantry::ports::PantryService;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pantry::validators::{PantryIngredientsResponse, SetIngredientsValidator},
        server::{
            api_entities::{api_error::{ApiError, ValidateJson}, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/ingredients",
    tag = "pantry",
    summary = "Replace pantry ingredients",
    description = "Stores the given list. Entries sharing an id are collapsed to the first one.",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    request_body = SetIngredientsValidator,
    responses(
        (status = 200, body = PantryIngredientsResponse),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn set_ingredients(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<SetIngredientsValidator>,
) -> Result<Response<PantryIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .set_ingredients(device.scope(), payload.ingredients)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PantryIngredientsResponse { data: ingredients }))
}
