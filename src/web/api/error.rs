use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::risk::{LaunchTimeError, RiskError};

#[derive(Debug)]
pub enum ApiError {
    MissingParameter(&'static str),
    Validation(String),
    BadFormat(LaunchTimeError),
    Geometry(String),
    Internal(String),
}

impl From<RiskError> for ApiError {
    fn from(e: RiskError) -> Self {
        match e {
            RiskError::Geometry { .. } => ApiError::Geometry(e.to_string()),
            RiskError::InvalidInput { .. } => ApiError::Validation(e.to_string()),
        }
    }
}

impl From<LaunchTimeError> for ApiError {
    fn from(e: LaunchTimeError) -> Self {
        ApiError::BadFormat(e)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::Validation(_) | ApiError::BadFormat(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Geometry(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::MissingParameter(name) => ErrorResponse::with_message(
                "missing_parameter",
                &format!("Missing required parameter: {}", name),
            ),
            ApiError::Validation(msg) => ErrorResponse::with_message("validation_failed", msg),
            ApiError::BadFormat(e) => ErrorResponse::with_message("bad_format", &e.to_string()),
            ApiError::Geometry(msg) => ErrorResponse::with_message("geometry_error", msg),
            ApiError::Internal(msg) => ErrorResponse::with_message("internal_error", msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {:?}", self);
        }
        (status, Json(self.body())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
