use axum::{Extension, extract::State};
use recipehub_core::domain::pantry::ports::PantryService;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pantry::validators::{FiltersResponse, SetFiltersValidator},
        server::{
            api_entities::{api_error::{ApiError, ValidateJson}, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    put,
    path = "/filters",
    tag = "pantry",
    summary = "Store filters",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    request_body = SetFiltersValidator,
    responses(
        (status = 200, body = FiltersResponse),
        (status = 422, description = "Malformed filter value")
    )
)]
pub async fn set_filters(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<SetFiltersValidator>,
) -> Result<Response<FiltersResponse>, ApiError> {
    let filters = state
        .service
        .set_filters(device.scope(), payload.filters)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FiltersResponse { data: filters }))
}
