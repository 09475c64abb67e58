//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use fleura_core::error::{AppError, ErrorKind};
use fleura_core::types::response::ApiErrorResponse;

/// Newtype that carries an [`AppError`] across the Axum response boundary.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts from
/// `AppError` automatically.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for(self.0.kind);

        // Server-side failures keep their detail in the log, not the body.
        let message = if status.is_server_error() {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Request failed");
            "An internal error occurred".to_string()
        } else {
            self.0.message.clone()
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

/// Status code and machine-readable code for each error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::ServiceUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_faults_map_to_4xx() {
        assert_eq!(status_for(ErrorKind::Validation).0, StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::NotFound).0, StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Conflict).0, StatusCode::CONFLICT);
    }

    #[test]
    fn test_backend_faults_map_to_500() {
        assert_eq!(
            status_for(ErrorKind::Database).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(ErrorKind::Internal).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
