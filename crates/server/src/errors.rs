use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::{ErrorBody, MessageBody};
use thiserror::Error;

/// Handler failures and the body shape each one is reported with.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    /// 400 `{"error": ...}`
    BadRequest(String),
    /// 404 `{"message": ...}`
    NotFound(String),
    /// 500 `{"error": ...}`
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Json(ErrorBody::new(msg))).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(MessageBody::new(msg))).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(msg))).into_response(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
