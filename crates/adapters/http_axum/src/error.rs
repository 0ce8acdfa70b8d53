//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bandsite_domain::error::{AccessError, BandsiteError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BandsiteError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(BandsiteError);

impl From<BandsiteError> for ApiError {
    fn from(err: BandsiteError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BandsiteError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            BandsiteError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            BandsiteError::Access(err @ AccessError::Unauthenticated) => {
                (StatusCode::UNAUTHORIZED, err.to_string())
            }
            BandsiteError::Access(err @ AccessError::Forbidden { .. }) => {
                (StatusCode::FORBIDDEN, err.to_string())
            }
            BandsiteError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandsite_domain::error::NotFoundError;

    fn status_of(err: impl Into<BandsiteError>) -> StatusCode {
        let err: BandsiteError = err.into();
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn should_map_each_error_kind_to_status() {
        assert_eq!(status_of(ValidationError::EmptyTitle), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(NotFoundError {
                entity: "Event",
                id: "x".to_string(),
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AccessError::Unauthenticated),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AccessError::Forbidden { action: "delete" }),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(BandsiteError::Storage("disk on fire".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
