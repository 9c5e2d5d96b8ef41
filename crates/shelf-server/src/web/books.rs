//! Book membership endpoint handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use shelf_core::api::{AddBookBody, BookResponse, UpdateBookBody};
use shelf_core::services::memberships;
use shelf_core::DeleteOutcome;

use crate::error::ServerError;
use crate::web::state::AppState;

/// POST /list/{list_id}/book
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i64>,
    Json(body): Json<AddBookBody>,
) -> Result<Json<BookResponse>, ServerError> {
    let mut store = state.store.lock().await;
    let book = memberships::add_book(
        &mut store,
        list_id,
        body.title.as_deref(),
        body.author.as_deref(),
        body.isbn.as_deref(),
    )?;
    Ok(Json(BookResponse::ok(book)))
}

/// PUT /list/{list_id}/book/{book_id}
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path((list_id, book_id)): Path<(i64, i64)>,
    Json(body): Json<UpdateBookBody>,
) -> Result<Json<BookResponse>, ServerError> {
    let mut store = state.store.lock().await;
    let book = memberships::update_book(
        &mut store,
        list_id,
        book_id,
        body.status.as_deref(),
        body.title.as_deref(),
        body.author.as_deref(),
        body.isbn.as_deref(),
    )?;
    Ok(Json(BookResponse::ok(book)))
}

/// DELETE /list/{list_id}/book/{book_id}
///
/// A successful delete answers with a confirmation message naming the book
/// and the list; deleting an absent membership answers 204 with no body.
pub async fn remove_book(
    State(state): State<Arc<AppState>>,
    Path((list_id, book_id)): Path<(i64, i64)>,
) -> Result<Response, ServerError> {
    let mut store = state.store.lock().await;
    match memberships::remove_book(&mut store, list_id, book_id)? {
        DeleteOutcome::Deleted(book) => {
            let msg = format!(
                "Successfully deleted {} from {}",
                book.book.title, book.list.name
            );
            Ok(Json(BookResponse::deleted(msg, book)).into_response())
        }
        DeleteOutcome::AlreadyAbsent => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
