//! Server error type and HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::error;

use shelf_core::api::ErrorBody;
use shelf_core::ServiceError;

/// Error returned by the endpoint handlers
///
/// Validation and lookup failures both map to 400, the contract existing
/// clients already handle. Storage failures map to 500 with the database
/// message passed through.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ServerError(#[from] ServiceError);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self.0 {
            ServiceError::Validation(msg) | ServiceError::NotFound(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ServiceError::Storage(source) => {
                error!("Storage failure: {}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string())
            }
        };

        (status, Json(ErrorBody::new(msg))).into_response()
    }
}
