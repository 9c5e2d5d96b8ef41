//! Note command handlers

use anyhow::Result;

use shelf_core::{ApiClient, ListView};

use crate::output::Output;

/// Add a note to a shelved book
pub async fn add(
    client: &ApiClient,
    list_id: i64,
    book_id: i64,
    note: String,
    output: &Output,
) -> Result<()> {
    let current = client.get_list(list_id).await?;
    let note = client.add_note(list_id, book_id, &note).await?;

    output.success("Note added");
    if output.is_quiet() {
        println!("{}", note.id);
        return Ok(());
    }

    let view = ListView::new(current).with_note_added(note);
    if let Some(book) = view.books().iter().find(|book| book.book_id == book_id) {
        output.print_book(book);
    }

    Ok(())
}
