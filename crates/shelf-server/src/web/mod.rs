//! HTTP surface
//!
//! Route handlers grouped by resource, plus the shared state and the
//! fallback responses.

pub mod books;
pub mod lists;
pub mod notes;
pub mod state;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use shelf_core::api::ErrorBody;

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Method not allowed")),
    )
}

/// Fallback for unknown paths
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_method_not_allowed_status() {
        let response = method_not_allowed().await.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let response = not_found().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
