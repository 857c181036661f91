use axum::{extract::Request, middleware::Next, response::Response};
use recipehub_core::domain::pantry::value_objects::PantryScope;

pub const DEVICE_ID_HEADER: &str = "x-device-id";
pub const DEFAULT_DEVICE_ID: &str = "default_device";

/// Device context stored in request extensions
#[derive(Clone, Debug)]
pub struct DeviceContext {
    pub device_id: String,
}

impl DeviceContext {
    pub fn scope(&self) -> PantryScope {
        PantryScope::new(self.device_id.clone())
    }
}

/// Reads the `X-Device-Id` header so pantry data is kept per device.
/// Requests without the header share the default device.
pub async fn device_middleware(mut req: Request, next: Next) -> Response {
    let device_id = req
        .headers()
        .get(DEVICE_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| DEFAULT_DEVICE_ID.to_string());

    req.extensions_mut().insert(DeviceContext { device_id });

    next.run(req).await
}
