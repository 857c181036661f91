use axum::{Extension, extract::State};
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
    get,
    path = "/saved-recipes",
    tag = "pantry",
    summary = "List saved recipe ids",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    responses(
        (status = 200, body = SavedRecipesResponse)
    )
)]
pub async fn get_saved_recipes(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<SavedRecipesResponse>, ApiError> {
    let saved = state
        .service
        .get_saved_recipes(device.scope())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SavedRecipesResponse { data: saved }))
}
