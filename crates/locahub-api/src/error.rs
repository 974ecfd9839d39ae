use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use locahub_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiEnvelope;

/// Wrapper turning an [`AppError`] into an HTTP response with the
/// standard envelope. Handlers return `Result<_, ApiError>` so `?`
/// works on any service call.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Database
            | ErrorKind::Internal
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(kind = %self.0.kind, error = %self.0, "request failed");
        } else {
            tracing::debug!(kind = %self.0.kind, error = %self.0, "request rejected");
        }

        // Internal details stay in the logs; clients get a generic message
        // for server-side failures.
        let message = if status.is_server_error() {
            "internal server error".to_string()
        } else {
            self.0.message.clone()
        };

        (status, Json(ApiEnvelope::<()>::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (AppError::validation("bad"), StatusCode::BAD_REQUEST),
            (AppError::unauthorized("no"), StatusCode::UNAUTHORIZED),
            (AppError::forbidden("no"), StatusCode::FORBIDDEN),
            (AppError::not_found("gone"), StatusCode::NOT_FOUND),
            (AppError::database("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).status_code(), expected);
        }
    }
}
