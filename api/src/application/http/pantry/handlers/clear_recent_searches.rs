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
    delete,
    path = "/recent-searches",
    tag = "pantry",
    summary = "Clear recent searches",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device owning the pantry"),
    ),
    responses(
        (status = 200, body = RecentSearchesResponse)
    )
)]
pub async fn clear_recent_searches(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<RecentSearchesResponse>, ApiError> {
    state
        .service
        .clear_recent_searches(device.scope())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecentSearchesResponse { data: Vec::new() }))
}
