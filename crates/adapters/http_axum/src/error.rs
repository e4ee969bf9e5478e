//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use picomock_domain::error::{BodyError, PicoMockError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PicoMockError`] to an HTTP response with appropriate status code.
pub struct ApiError(PicoMockError);

impl From<PicoMockError> for ApiError {
    fn from(err: PicoMockError) -> Self {
        Self(err)
    }
}

impl From<BodyError> for ApiError {
    fn from(err: BodyError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PicoMockError::Body(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PicoMockError::Fixture(err) => {
                tracing::error!(error = %err, "fixture serialization error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
