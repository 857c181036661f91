use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recipehub_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::UnprocessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_VALIDATION")
            }
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_UPSTREAM"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Invalid => ApiError::BadRequest("Invalid input".to_string()),
            CoreError::InvalidFilter(message) => ApiError::BadRequest(message),
            CoreError::ExternalServiceError(message) => ApiError::BadGateway(message),
            CoreError::StorageError(message) => ApiError::InternalServerError(message),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::UnprocessableEntity(errors.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();

        if status.is_server_error() {
            tracing::error!("{}: {}", code, self);
        }

        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules after deserializing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::Invalid, StatusCode::BAD_REQUEST),
            (
                CoreError::InvalidFilter("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::ExternalServiceError("down".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::StorageError("disk".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).parts().0, status);
        }
    }

    #[test]
    fn upstream_message_is_kept() {
        let error = ApiError::from(CoreError::ExternalServiceError("quota".to_string()));
        assert_eq!(error.to_string(), "quota");
    }
}
