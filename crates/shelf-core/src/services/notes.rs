//! Note operations
//!
//! Notes are append-only and attached to a membership: the same book on two
//! lists has two independent note threads.

use crate::models::BookNote;
use crate::services::{ServiceError, ServiceResult};
use crate::store::Store;

/// Append a note to the membership of a book on a list
pub fn add_note(
    store: &mut Store,
    list_id: i64,
    book_id: i64,
    note: Option<&str>,
) -> ServiceResult<BookNote> {
    let note = match note {
        Some(note) if !note.is_empty() => note,
        _ => return Err(ServiceError::Validation("Note is missing".to_string())),
    };

    let membership = store.find_membership(list_id, book_id)?.ok_or_else(|| {
        ServiceError::NotFound(format!(
            "Could not find list book for listId {} and bookId {}",
            list_id, book_id
        ))
    })?;

    Ok(store.insert_note(membership.id, note)?)
}
