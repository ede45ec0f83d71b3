//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidPayload(String),
    #[error("Account with id '{0}' was not found.")]
    NotFound(u64),
    #[error("request body exceeds the configured limit")]
    PayloadTooLarge,
    #[error("{0} was not found on this server.")]
    RouteNotFound(String),
    #[error("account id space exhausted")]
    IdSpaceExhausted,
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::IdSpaceExhausted | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(
            AppError::NotFound(7).to_string(),
            "Account with id '7' was not found."
        );
    }

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::InvalidPayload("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::RouteNotFound("/x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(AppError::IdSpaceExhausted.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
