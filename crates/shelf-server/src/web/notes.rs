//! Note endpoint handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;

use shelf_core::api::{AddNoteBody, NoteResponse};
use shelf_core::services::notes;

use crate::error::ServerError;
use crate::web::state::AppState;

/// POST /list/{list_id}/book/{book_id}/note
pub async fn add_note(
    State(state): State<Arc<AppState>>,
    Path((list_id, book_id)): Path<(i64, i64)>,
    Json(body): Json<AddNoteBody>,
) -> Result<Json<NoteResponse>, ServerError> {
    let mut store = state.store.lock().await;
    let note = notes::add_note(&mut store, list_id, book_id, body.note.as_deref())?;
    Ok(Json(NoteResponse::ok(note)))
}
