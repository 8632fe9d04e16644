use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fruitstand_core::error::CoreError;
use fruitstand_core::validation;
use fruitstand_db::store::StoreError;
use validator::ValidationErrors;

use crate::response::{ErrorBody, ErrorResponse};

/// Error name reported when an id resolves to no record.
pub const NOT_FOUND_NAME: &str = "DocumentNotFoundError";

/// Fixed message reported when an id resolves to no record.
pub const NOT_FOUND_MESSAGE: &str = "The provided id doesn't match any document";

/// Application-level error type for HTTP handlers.
///
/// Not-found is the only recoverable, client-facing case (404). Everything the
/// store reports, including validation failures, surfaces as a 500 carrying
/// the underlying error's name and message. Bodies that cannot be decoded at
/// all are rejected with 400 before reaching a handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error from `fruitstand_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the fruit store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A request body that could not be parsed.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Core(CoreError::Validation(validation::describe("Fruit", &errors)))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, name, message) = match self {
            ApiError::Core(CoreError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                NOT_FOUND_NAME,
                NOT_FOUND_MESSAGE.to_string(),
            ),
            ApiError::Core(CoreError::Validation(msg)) => {
                tracing::warn!(error = %msg, "Validation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "ValidationError", msg)
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, kind = err.name(), "Store error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.name(), err.to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BadRequestError", msg),
        };

        let body = ErrorResponse {
            error: ErrorBody { name, message },
        };

        (status, Json(body)).into_response()
    }
}
