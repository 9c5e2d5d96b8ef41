//! List operations
//!
//! Create, read, rename and delete reading lists.

use crate::models::{List, ListDetail};
use crate::services::{DeleteOutcome, ServiceError, ServiceResult};
use crate::store::Store;

/// Create a new list
///
/// The returned detail carries an empty membership array so clients can merge
/// it straight into their snapshot.
pub fn create(store: &mut Store, name: Option<&str>) -> ServiceResult<ListDetail> {
    let name = require_name(name)?;
    let list = store.insert_list(name)?;

    Ok(ListDetail {
        id: list.id,
        name: list.name,
        created_at: list.created_at,
        updated_at: list.updated_at,
        books: Vec::new(),
    })
}

/// Get a list with its memberships, newest first
pub fn get(store: &Store, id: i64) -> ServiceResult<ListDetail> {
    store
        .get_list_detail(id)?
        .ok_or_else(|| not_found(id))
}

/// Get every list with its memberships, newest list first
pub fn all(store: &Store) -> ServiceResult<Vec<ListDetail>> {
    Ok(store.all_list_details()?)
}

/// Rename a list
pub fn rename(store: &mut Store, id: i64, name: Option<&str>) -> ServiceResult<ListDetail> {
    let name = require_name(name)?;

    if store.rename_list(id, name)?.is_none() {
        return Err(not_found(id));
    }
    get(store, id)
}

/// Delete a list
///
/// Deleting a list that does not exist is reported as `AlreadyAbsent`, not as
/// an error. The cascade removes its memberships and their notes.
pub fn delete(store: &mut Store, id: i64) -> ServiceResult<DeleteOutcome<List>> {
    match store.delete_list(id)? {
        Some(list) => Ok(DeleteOutcome::Deleted(list)),
        None => Ok(DeleteOutcome::AlreadyAbsent),
    }
}

fn require_name(name: Option<&str>) -> Result<&str, ServiceError> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ServiceError::Validation("List name is required".to_string())),
    }
}

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Could not find list with id {}", id))
}
