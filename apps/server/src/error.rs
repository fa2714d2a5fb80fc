use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tourism_core::errors::{Error as CoreError, ValidationError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// Upstream data could not be loaded; carries the user-facing message.
    #[error("{0}")]
    BadGateway(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Validation(ValidationError::UnknownCategory(_)) => {
                    (StatusCode::NOT_FOUND, e.to_string())
                }
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::Source(_) => (StatusCode::BAD_GATEWAY, e.to_string()),
                CoreError::InvalidConfigValue(_) | CoreError::Unexpected(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
            },
            ApiError::BadGateway(reason) => (StatusCode::BAD_GATEWAY, reason.clone()),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
