//! Book membership operations
//!
//! Adding a book to a list, updating its membership (status plus the book's
//! own fields, atomically) and removing it again.

use crate::models::{ListBookDetail, Status};
use crate::services::{DeleteOutcome, ServiceError, ServiceResult};
use crate::store::Store;

/// Add a book to a list
///
/// The book is deduplicated globally by ISBN; the membership is deduplicated
/// by (list, book). Re-adding an existing pair returns the current membership
/// unchanged, so the operation is idempotent.
pub fn add_book(
    store: &mut Store,
    list_id: i64,
    title: Option<&str>,
    author: Option<&str>,
    isbn: Option<&str>,
) -> ServiceResult<ListBookDetail> {
    let (title, author, isbn) = match (present(title), present(author), present(isbn)) {
        (Some(title), Some(author), Some(isbn)) => (title, author, isbn),
        _ => {
            return Err(ServiceError::Validation(
                "Some information for adding a book is missing".to_string(),
            ))
        }
    };

    if store.get_list(list_id)?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "Could not find list with id {}",
            list_id
        )));
    }

    Ok(store.add_book_to_list(list_id, isbn, title, author)?)
}

/// Update a membership's status together with its book's fields
///
/// Both writes happen in one transaction; a failure leaves neither applied.
pub fn update_book(
    store: &mut Store,
    list_id: i64,
    book_id: i64,
    status: Option<&str>,
    title: Option<&str>,
    author: Option<&str>,
    isbn: Option<&str>,
) -> ServiceResult<ListBookDetail> {
    let (status, title, author, isbn) = match (
        present(status),
        present(title),
        present(author),
        present(isbn),
    ) {
        (Some(status), Some(title), Some(author), Some(isbn)) => (status, title, author, isbn),
        _ => return Err(invalid_update()),
    };

    let status: Status = status.parse().map_err(|_| invalid_update())?;

    store
        .update_membership(list_id, book_id, status, isbn, title, author)?
        .ok_or_else(|| {
            ServiceError::NotFound("Could not find book for list id provided".to_string())
        })
}

/// Remove a book from a list
///
/// Removing a pair that is not on the list is reported as `AlreadyAbsent`.
/// The returned detail still carries the book and list rows so callers can
/// build a confirmation message.
pub fn remove_book(
    store: &mut Store,
    list_id: i64,
    book_id: i64,
) -> ServiceResult<DeleteOutcome<ListBookDetail>> {
    match store.delete_membership(list_id, book_id)? {
        Some(detail) => Ok(DeleteOutcome::Deleted(detail)),
        None => Ok(DeleteOutcome::AlreadyAbsent),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn invalid_update() -> ServiceError {
    ServiceError::Validation(
        "All Book fields including status are required to update a book.".to_string(),
    )
}
