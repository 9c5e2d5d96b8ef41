//! Book command handlers
//!
//! Mutations fetch the list once up front, send the request, then merge the
//! response into the snapshot instead of refetching.

use anyhow::{anyhow, Result};

use shelf_core::{ApiClient, DeleteOutcome, ListView, Status};

use crate::output::Output;
use crate::prompt::confirm;

/// Add a book to a list
pub async fn add(
    client: &ApiClient,
    list_id: i64,
    title: String,
    author: String,
    isbn: String,
    output: &Output,
) -> Result<()> {
    let current = client.get_list(list_id).await?;
    let book = client.add_book(list_id, &title, &author, &isbn).await?;

    output.success(&format!("Added {} to {}", book.book.title, current.name));
    if output.is_quiet() {
        println!("{}", book.book_id);
        return Ok(());
    }

    let view = ListView::new(current).with_book_added(book);
    output.print_list(view.detail());

    Ok(())
}

/// Update a shelved book's status and fields
///
/// Fields left off the command line keep their current values; the server
/// requires the full set on every update.
pub async fn update(
    client: &ApiClient,
    list_id: i64,
    book_id: i64,
    status: Option<Status>,
    title: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
    output: &Output,
) -> Result<()> {
    let current = client.get_list(list_id).await?;
    let existing = current
        .books
        .iter()
        .find(|book| book.book_id == book_id)
        .ok_or_else(|| anyhow!("No book with id {} on list {}", book_id, list_id))?;

    let status = status.unwrap_or(existing.status);
    let title = title.unwrap_or_else(|| existing.book.title.clone());
    let author = author.unwrap_or_else(|| existing.book.author.clone());
    let isbn = isbn.unwrap_or_else(|| existing.book.isbn.clone());

    let updated = client
        .update_book(list_id, book_id, status, &title, &author, &isbn)
        .await?;

    output.success(&format!(
        "Updated {} ({})",
        updated.book.title,
        updated.status.label()
    ));
    if output.is_quiet() {
        println!("{}", updated.book_id);
        return Ok(());
    }

    let view = ListView::new(current).with_book_updated(updated);
    output.print_list(view.detail());

    Ok(())
}

/// Remove a book from a list
pub async fn remove(
    client: &ApiClient,
    list_id: i64,
    book_id: i64,
    output: &Output,
) -> Result<()> {
    let current = client.get_list(list_id).await?;

    if output.should_prompt() {
        if let Some(existing) = current.books.iter().find(|book| book.book_id == book_id) {
            println!(
                "Remove book: {} - {}",
                existing.book.title, existing.book.author
            );
            if !confirm("Are you sure?")? {
                println!("Cancelled.");
                return Ok(());
            }
        }
    }

    match client.remove_book(list_id, book_id).await? {
        DeleteOutcome::Deleted(book) => {
            output.success(&format!(
                "Successfully deleted {} from {}",
                book.book.title, book.list.name
            ));
            if output.is_quiet() {
                return Ok(());
            }
            let view = ListView::new(current).with_book_removed(book.id);
            output.print_list(view.detail());
        }
        DeleteOutcome::AlreadyAbsent => {
            output.message(&format!("No book with id {} on list {}", book_id, list_id));
        }
    }

    Ok(())
}
