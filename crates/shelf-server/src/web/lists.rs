//! List endpoint handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use shelf_core::api::{DeletedListResponse, ListNameBody, ListResponse, ListsResponse};
use shelf_core::services::lists;
use shelf_core::DeleteOutcome;

use crate::error::ServerError;
use crate::web::state::AppState;

/// POST /list
pub async fn create_list(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ListNameBody>,
) -> Result<Json<ListResponse>, ServerError> {
    let mut store = state.store.lock().await;
    let list = lists::create(&mut store, body.name.as_deref())?;
    Ok(Json(ListResponse::ok(list)))
}

/// GET /list
pub async fn all_lists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListsResponse>, ServerError> {
    let store = state.store.lock().await;
    let all = lists::all(&store)?;
    Ok(Json(ListsResponse::ok(all)))
}

/// GET /list/{list_id}
pub async fn get_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i64>,
) -> Result<Json<ListResponse>, ServerError> {
    let store = state.store.lock().await;
    let list = lists::get(&store, list_id)?;
    Ok(Json(ListResponse::ok(list)))
}

/// PATCH /list/{list_id}
pub async fn rename_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i64>,
    Json(body): Json<ListNameBody>,
) -> Result<Json<ListResponse>, ServerError> {
    let mut store = state.store.lock().await;
    let list = lists::rename(&mut store, list_id, body.name.as_deref())?;
    Ok(Json(ListResponse::ok(list)))
}

/// DELETE /list/{list_id}
///
/// Deleting an absent list answers 204 with no body.
pub async fn delete_list(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i64>,
) -> Result<Response, ServerError> {
    let mut store = state.store.lock().await;
    match lists::delete(&mut store, list_id)? {
        DeleteOutcome::Deleted(list) => Ok(Json(DeletedListResponse::ok(list)).into_response()),
        DeleteOutcome::AlreadyAbsent => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
