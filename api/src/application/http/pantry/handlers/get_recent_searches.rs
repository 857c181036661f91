use axum::{Extension, extract::State};
use recipehub_core::domain::pantry::ports::PantryService;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        pantry::validators::RecentSearchesResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    get,
    path = "/recent-searches",
    tag = "pantry",
    summary = "List recent searches",
    description = "Newest first, at most 10.",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    responses(
        (status = 200, body = RecentSearchesResponse)
    )
)]
pub async fn get_recent_searches(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<RecentSearchesResponse>, ApiError> {
    let searches = state
        .service
        .get_recent_searches(device.scope())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecentSearchesResponse { data: searches }))
}
