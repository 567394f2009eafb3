//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use echochat_core::echo::{EchoError, INTERNAL_ERROR_MESSAGE, VALIDATION_ERROR_MESSAGE};
use echochat_core::models::ErrorResponse;
use thiserror::Error;
use tracing::{debug, error};

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// The carried string is for logs only; clients always get the fixed body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(detail) => {
                debug!(%detail, "rejecting chat request");
                (StatusCode::BAD_REQUEST, VALIDATION_ERROR_MESSAGE)
            }
            AppError::Internal(detail) => {
                error!(%detail, "unexpected error while handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };
        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<EchoError> for AppError {
    fn from(e: EchoError) -> Self {
        match e {
            EchoError::InvalidMessage => AppError::Validation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let resp = AppError::Validation("missing".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_server_error() {
        let resp = AppError::Internal("db on fire".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn echo_error_becomes_validation() {
        assert!(matches!(
            AppError::from(EchoError::InvalidMessage),
            AppError::Validation(_)
        ));
    }
}
