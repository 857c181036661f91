use axum::{
    Extension,
    extract::{Path, State},
};
use recipehub_core::domain::{
    pantry::ports::PantryService, recipe::value_objects::DietaryPreference,
};

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pantry::validators::FiltersResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/filters/dietary/{preference}",
    tag = "pantry",
    summary = "Toggle a dietary preference",
    description = "Selecting a preference clears `none`. Removing the last preference or selecting `none` restores `none`.",
    params(
        ("preference" = String, Path, description = "vegan, vegetarian, gluten-free, dairy-free, keto, paleo, low-carb or none"),
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    responses(
        (status = 200, body = FiltersResponse)
    )
)]
pub async fn toggle_dietary_preference(
    Path(preference): Path<String>,
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<FiltersResponse>, ApiError> {
    let filters = state
        .service
        .toggle_dietary_preference(device.scope(), DietaryPreference::from(preference))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FiltersResponse { data: filters }))
}
