use axum::{Extension, extract::State};
use recipehub_core::domain::pantry::ports::PantryService;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pantry::validators::{AddRecentSearchValidator, RecentSearchesResponse},
        server::{
            api_entities::{api_error::{ApiError, ValidateJson}, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/recent-searches",
    tag = "pantry",
    summary = "Record a search",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    request_body = AddRecentSearchValidator,
    responses(
        (status = 200, body = RecentSearchesResponse),
        (status = 422, description = "Empty or oversized query")
    )
)]
pub async fn add_recent_search(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<AddRecentSearchValidator>,
) -> Result<Response<RecentSearchesResponse>, ApiError> {
    let searches = state
        .service
        .push_recent_search(device.scope(), payload.query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecentSearchesResponse { data: searches }))
}
