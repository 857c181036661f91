use axum::{Extension, extract::State};
use recipehub_core::domain::pantry::ports::PantryService;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pantry::validators::{AddIngredientValidator, PantryIngredientsResponse},
        server::{
            api_entities::{api_error::{ApiError, ValidateJson}, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "pantry",
    summary = "Add an ingredient",
    description = "Adds a typed-in (`manual`) or looked-up (`known`) ingredient. Known ingredients already in the pantry are not added twice.",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    request_body = AddIngredientValidator,
    responses(
        (status = 201, body = PantryIngredientsResponse),
        (status = 400, description = "Empty name or id")
    )
)]
pub async fn add_ingredient(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<AddIngredientValidator>,
) -> Result<Response<PantryIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .add_ingredient(device.scope(), payload.input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(PantryIngredientsResponse { data: ingredients }))
}
