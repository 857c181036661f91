use axum::{Extension, extract::State};
use recipehub_core::domain::pantry::ports::PantryService;

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
    get,
    path = "/filters",
    tag = "pantry",
    summary = "Get stored filters",
    description = "Returns the default filters when none were stored yet.",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    responses(
        (status = 200, body = FiltersResponse)
    )
)]
pub async fn get_filters(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<FiltersResponse>, ApiError> {
    let filters = state
        .service
        .get_filters(device.scope())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FiltersResponse { data: filters }))
}
