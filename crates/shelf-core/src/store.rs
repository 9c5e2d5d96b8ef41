//! Unified storage interface
//!
//! The `Store` owns the SQLite connection and exposes typed operations for
//! lists, books, memberships and notes. Every mutation that touches more
//! than one row runs inside a single transaction.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open(&config)?;
//!
//! let list = store.insert_list("Sci-Fi")?;
//! let membership = store.add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")?;
//! ```

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Transaction};

use crate::config::Config;
use crate::models::{Book, BookNote, List, ListBook, ListBookDetail, ListDetail, Status};
use crate::storage::{init_schema, needs_init, StorageError, StorageResult};

/// Unified storage interface for Shelf
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at the database path from the configuration
    ///
    /// Creates the data directory and initializes the schema on first run.
    pub fn open(config: &Config) -> StorageResult<Self> {
        let path = config.db_path();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(&path).map_err(|source| StorageError::Open {
            path: path.clone(),
            source,
        })?;

        // Enable foreign keys (per-connection in SQLite)
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        if needs_init(&conn) {
            init_schema(&conn)?;
        }

        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    // ==================== List Operations ====================

    /// Insert a new list, returning the hydrated row
    pub fn insert_list(&mut self, name: &str) -> StorageResult<List> {
        let now = now_millis();
        self.conn.execute(
            "INSERT INTO lists (name, created_at, updated_at) VALUES (?, ?, ?)",
            params![name, now.timestamp_millis(), now.timestamp_millis()],
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(List {
            id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a list row by id
    pub fn get_list(&self, id: i64) -> StorageResult<Option<List>> {
        fetch_list(&self.conn, id)
    }

    /// Get a list with its memberships hydrated, newest membership first
    pub fn get_list_detail(&self, id: i64) -> StorageResult<Option<ListDetail>> {
        fetch_list_detail(&self.conn, id)
    }

    /// Get every list with memberships hydrated, newest list first
    pub fn all_list_details(&self) -> StorageResult<Vec<ListDetail>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, created_at, updated_at FROM lists ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt
            .query_map([], list_from_row)?
            .collect::<Result<Vec<List>, _>>()?;

        let mut lists = Vec::new();
        for list in rows {
            let books = fetch_memberships_for_list(&self.conn, list.id)?;
            lists.push(ListDetail {
                id: list.id,
                name: list.name,
                created_at: list.created_at,
                updated_at: list.updated_at,
                books,
            });
        }

        Ok(lists)
    }

    /// Rename a list, returning the updated row or `None` if it does not exist
    pub fn rename_list(&mut self, id: i64, name: &str) -> StorageResult<Option<List>> {
        let now = now_millis();
        let updated = self.conn.execute(
            "UPDATE lists SET name = ?, updated_at = ? WHERE id = ?",
            params![name, now.timestamp_millis(), id],
        )?;

        if updated == 0 {
            return Ok(None);
        }
        fetch_list(&self.conn, id)
    }

    /// Delete a list, returning the deleted row or `None` if it does not exist
    ///
    /// Memberships and their notes are removed by the schema's cascades.
    pub fn delete_list(&mut self, id: i64) -> StorageResult<Option<List>> {
        let tx = self.conn.transaction()?;

        let list = tx
            .query_row(
                "SELECT id, name, created_at, updated_at FROM lists WHERE id = ?",
                params![id],
                list_from_row,
            )
            .optional()?;

        if let Some(list) = list {
            tx.execute("DELETE FROM lists WHERE id = ?", params![id])?;
            tx.commit()?;
            Ok(Some(list))
        } else {
            Ok(None)
        }
    }

    // ==================== Book Operations ====================

    /// Find a book by its ISBN
    pub fn find_book_by_isbn(&self, isbn: &str) -> StorageResult<Option<Book>> {
        let book = self
            .conn
            .query_row(
                "SELECT id, isbn, title, author, created_at, updated_at FROM books WHERE isbn = ?",
                params![isbn],
                book_from_row,
            )
            .optional()?;
        Ok(book)
    }

    // ==================== Membership Operations ====================

    /// Find a membership by its (list, book) pair
    pub fn find_membership(&self, list_id: i64, book_id: i64) -> StorageResult<Option<ListBook>> {
        fetch_membership(&self.conn, list_id, book_id)
    }

    /// Add a book to a list
    ///
    /// The book is looked up by ISBN and created if absent; the membership is
    /// looked up by (list, book) and created with `Status::Unread` if absent.
    /// An existing membership is returned unchanged. Runs in one transaction.
    pub fn add_book_to_list(
        &mut self,
        list_id: i64,
        isbn: &str,
        title: &str,
        author: &str,
    ) -> StorageResult<ListBookDetail> {
        let tx = self.conn.transaction()?;

        let book_id = get_or_create_book(&tx, isbn, title, author)?;
        let membership = match fetch_membership(&tx, list_id, book_id)? {
            Some(existing) => existing,
            None => insert_membership(&tx, list_id, book_id)?,
        };
        let detail = hydrate_membership(&tx, membership)?;

        tx.commit()?;
        Ok(detail)
    }

    /// Update a membership's status and its book's fields in one transaction
    ///
    /// Returns `None` if no membership exists for the (list, book) pair. A
    /// failure updating the book (for example an ISBN collision) rolls the
    /// status change back as well.
    pub fn update_membership(
        &mut self,
        list_id: i64,
        book_id: i64,
        status: Status,
        isbn: &str,
        title: &str,
        author: &str,
    ) -> StorageResult<Option<ListBookDetail>> {
        let tx = self.conn.transaction()?;

        let membership = match fetch_membership(&tx, list_id, book_id)? {
            Some(membership) => membership,
            None => return Ok(None),
        };

        let now = now_millis();
        tx.execute(
            "UPDATE list_books SET status = ?, updated_at = ? WHERE id = ?",
            params![status.code(), now.timestamp_millis(), membership.id],
        )?;
        tx.execute(
            "UPDATE books SET isbn = ?, title = ?, author = ?, updated_at = ? WHERE id = ?",
            params![
                isbn,
                title,
                author,
                now.timestamp_millis(),
                membership.book_id
            ],
        )?;

        let updated = match fetch_membership(&tx, list_id, book_id)? {
            Some(membership) => membership,
            None => return Ok(None),
        };
        let detail = hydrate_membership(&tx, updated)?;

        tx.commit()?;
        Ok(Some(detail))
    }

    /// Delete a membership, returning the hydrated row or `None` if absent
    ///
    /// The membership's notes are removed by the schema's cascade; the book
    /// row itself is kept.
    pub fn delete_membership(
        &mut self,
        list_id: i64,
        book_id: i64,
    ) -> StorageResult<Option<ListBookDetail>> {
        let tx = self.conn.transaction()?;

        let membership = match fetch_membership(&tx, list_id, book_id)? {
            Some(membership) => membership,
            None => return Ok(None),
        };
        let detail = hydrate_membership(&tx, membership)?;

        tx.execute("DELETE FROM list_books WHERE id = ?", params![detail.id])?;

        tx.commit()?;
        Ok(Some(detail))
    }

    // ==================== Note Operations ====================

    /// Append a note to a membership, returning the hydrated row
    pub fn insert_note(&mut self, membership_id: i64, note: &str) -> StorageResult<BookNote> {
        let now = now_millis();
        self.conn.execute(
            "INSERT INTO book_notes (membership_id, note, created_at, updated_at) VALUES (?, ?, ?, ?)",
            params![
                membership_id,
                note,
                now.timestamp_millis(),
                now.timestamp_millis()
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(BookNote {
            id,
            membership_id,
            note: note.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Get all notes for a membership, oldest first
    pub fn notes_for_membership(&self, membership_id: i64) -> StorageResult<Vec<BookNote>> {
        fetch_notes(&self.conn, membership_id)
    }
}

// ==================== Row mapping ====================

fn list_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<List> {
    Ok(List {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: millis_to_datetime(row.get(2)?),
        updated_at: millis_to_datetime(row.get(3)?),
    })
}

fn book_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        isbn: row.get(1)?,
        title: row.get(2)?,
        author: row.get(3)?,
        created_at: millis_to_datetime(row.get(4)?),
        updated_at: millis_to_datetime(row.get(5)?),
    })
}

fn membership_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ListBook> {
    let status: String = row.get(3)?;
    let status = Status::from_str(&status).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(ListBook {
        id: row.get(0)?,
        list_id: row.get(1)?,
        book_id: row.get(2)?,
        status,
        created_at: millis_to_datetime(row.get(4)?),
        updated_at: millis_to_datetime(row.get(5)?),
    })
}

fn note_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookNote> {
    Ok(BookNote {
        id: row.get(0)?,
        membership_id: row.get(1)?,
        note: row.get(2)?,
        created_at: millis_to_datetime(row.get(3)?),
        updated_at: millis_to_datetime(row.get(4)?),
    })
}

// Timestamps are stored at millisecond precision
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_else(Utc::now)
}

// ==================== Query helpers ====================

fn fetch_list(conn: &Connection, id: i64) -> StorageResult<Option<List>> {
    let list = conn
        .query_row(
            "SELECT id, name, created_at, updated_at FROM lists WHERE id = ?",
            params![id],
            list_from_row,
        )
        .optional()?;
    Ok(list)
}

fn fetch_book(conn: &Connection, id: i64) -> StorageResult<Book> {
    let book = conn.query_row(
        "SELECT id, isbn, title, author, created_at, updated_at FROM books WHERE id = ?",
        params![id],
        book_from_row,
    )?;
    Ok(book)
}

fn fetch_membership(
    conn: &Connection,
    list_id: i64,
    book_id: i64,
) -> StorageResult<Option<ListBook>> {
    let membership = conn
        .query_row(
            "SELECT id, list_id, book_id, status, created_at, updated_at FROM list_books \
             WHERE list_id = ? AND book_id = ?",
            params![list_id, book_id],
            membership_from_row,
        )
        .optional()?;
    Ok(membership)
}

fn fetch_notes(conn: &Connection, membership_id: i64) -> StorageResult<Vec<BookNote>> {
    let mut stmt = conn.prepare(
        "SELECT id, membership_id, note, created_at, updated_at FROM book_notes \
         WHERE membership_id = ? ORDER BY created_at, id",
    )?;
    let notes = stmt
        .query_map(params![membership_id], note_from_row)?
        .collect::<Result<Vec<BookNote>, _>>()?;
    Ok(notes)
}

/// Hydrate a membership with its book, owning list and notes
fn hydrate_membership(conn: &Connection, membership: ListBook) -> StorageResult<ListBookDetail> {
    let book = fetch_book(conn, membership.book_id)?;
    let list = conn.query_row(
        "SELECT id, name, created_at, updated_at FROM lists WHERE id = ?",
        params![membership.list_id],
        list_from_row,
    )?;
    let notes = fetch_notes(conn, membership.id)?;

    Ok(ListBookDetail {
        id: membership.id,
        list_id: membership.list_id,
        book_id: membership.book_id,
        status: membership.status,
        created_at: membership.created_at,
        updated_at: membership.updated_at,
        book,
        list,
        notes,
    })
}

fn fetch_memberships_for_list(
    conn: &Connection,
    list_id: i64,
) -> StorageResult<Vec<ListBookDetail>> {
    let mut stmt = conn.prepare(
        "SELECT id, list_id, book_id, status, created_at, updated_at FROM list_books \
         WHERE list_id = ? ORDER BY created_at DESC, id DESC",
    )?;
    let memberships = stmt
        .query_map(params![list_id], membership_from_row)?
        .collect::<Result<Vec<ListBook>, _>>()?;

    let mut details = Vec::new();
    for membership in memberships {
        details.push(hydrate_membership(conn, membership)?);
    }
    Ok(details)
}

fn fetch_list_detail(conn: &Connection, id: i64) -> StorageResult<Option<ListDetail>> {
    let list = match fetch_list(conn, id)? {
        Some(list) => list,
        None => return Ok(None),
    };
    let books = fetch_memberships_for_list(conn, id)?;

    Ok(Some(ListDetail {
        id: list.id,
        name: list.name,
        created_at: list.created_at,
        updated_at: list.updated_at,
        books,
    }))
}

// ==================== Transaction helpers ====================

/// Get or create a book by ISBN, returning its ID
///
/// An existing book's title and author are left as they are.
fn get_or_create_book(
    tx: &Transaction,
    isbn: &str,
    title: &str,
    author: &str,
) -> StorageResult<i64> {
    let existing: Option<i64> = tx
        .query_row("SELECT id FROM books WHERE isbn = ?", params![isbn], |row| {
            row.get(0)
        })
        .optional()?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let now = now_millis();
    tx.execute(
        "INSERT INTO books (isbn, title, author, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        params![
            isbn,
            title,
            author,
            now.timestamp_millis(),
            now.timestamp_millis()
        ],
    )?;
    Ok(tx.last_insert_rowid())
}

/// Insert a fresh membership with `Status::Unread`
fn insert_membership(tx: &Transaction, list_id: i64, book_id: i64) -> StorageResult<ListBook> {
    let now = now_millis();
    tx.execute(
        "INSERT INTO list_books (list_id, book_id, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?)",
        params![
            list_id,
            book_id,
            Status::Unread.code(),
            now.timestamp_millis(),
            now.timestamp_millis()
        ],
    )?;

    Ok(ListBook {
        id: tx.last_insert_rowid(),
        list_id,
        book_id,
        status: Status::Unread,
        created_at: now,
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;
    use tempfile::TempDir;

    fn test_store() -> Store {
        Store::open_in_memory().unwrap()
    }

    #[test]
    fn test_insert_and_get_list() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        assert_eq!(list.name, "Sci-Fi");

        let fetched = store.get_list(list.id).unwrap().unwrap();
        assert_eq!(fetched, list);
    }

    #[test]
    fn test_get_list_missing_returns_none() {
        let store = test_store();
        assert!(store.get_list(42).unwrap().is_none());
    }

    #[test]
    fn test_rename_list() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let renamed = store.rename_list(list.id, "Science Fiction").unwrap().unwrap();
        assert_eq!(renamed.id, list.id);
        assert_eq!(renamed.name, "Science Fiction");

        assert!(store.rename_list(999, "Nothing").unwrap().is_none());
    }

    #[test]
    fn test_delete_list_returns_deleted_row() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let deleted = store.delete_list(list.id).unwrap().unwrap();
        assert_eq!(deleted.id, list.id);
        assert_eq!(deleted.name, "Sci-Fi");

        assert!(store.get_list(list.id).unwrap().is_none());
        assert!(store.delete_list(list.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_list_cascades_to_memberships_and_notes() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let membership = store
            .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();
        store.insert_note(membership.id, "classic").unwrap();

        store.delete_list(list.id).unwrap();

        assert!(store
            .find_membership(list.id, membership.book_id)
            .unwrap()
            .is_none());
        assert!(store.notes_for_membership(membership.id).unwrap().is_empty());

        // The book itself survives list deletion
        assert!(store.find_book_by_isbn("9780441013593").unwrap().is_some());
    }

    #[test]
    fn test_add_book_creates_book_and_membership() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let detail = store
            .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();

        assert_eq!(detail.list_id, list.id);
        assert_eq!(detail.status, Status::Unread);
        assert_eq!(detail.book.isbn, "9780441013593");
        assert_eq!(detail.book.title, "Dune");
        assert_eq!(detail.list.name, "Sci-Fi");
        assert!(detail.notes.is_empty());
    }

    #[test]
    fn test_add_book_reuses_book_by_isbn() {
        let mut store = test_store();

        let first = store.insert_list("Sci-Fi").unwrap();
        let second = store.insert_list("To Read").unwrap();

        let a = store
            .add_book_to_list(first.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();
        let b = store
            .add_book_to_list(second.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();

        assert_eq!(a.book_id, b.book_id);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_add_book_same_list_returns_existing_membership() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let first = store
            .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();
        let again = store
            .add_book_to_list(list.id, "9780441013593", "Dune (Anniversary)", "F. Herbert")
            .unwrap();

        assert_eq!(again.id, first.id);
        // The existing book's fields are not written through
        assert_eq!(again.book.title, "Dune");
        assert_eq!(again.book.author, "Frank Herbert");
    }

    #[test]
    fn test_update_membership() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let detail = store
            .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();

        let updated = store
            .update_membership(
                list.id,
                detail.book_id,
                Status::InProgress,
                "9780441013593",
                "Dune (40th Anniversary Edition)",
                "Frank Herbert",
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, detail.id);
        assert_eq!(updated.status, Status::InProgress);
        assert_eq!(updated.book.title, "Dune (40th Anniversary Edition)");
    }

    #[test]
    fn test_update_membership_missing_returns_none() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let result = store
            .update_membership(list.id, 42, Status::Finished, "x", "t", "a")
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_update_membership_rolls_back_on_isbn_conflict() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let dune = store
            .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();
        store
            .add_book_to_list(list.id, "9780553293357", "Foundation", "Isaac Asimov")
            .unwrap();

        // Updating Dune's ISBN to Foundation's collides with the UNIQUE index
        let result = store.update_membership(
            list.id,
            dune.book_id,
            Status::Finished,
            "9780553293357",
            "Dune",
            "Frank Herbert",
        );
        assert!(result.is_err());

        // The status change must have rolled back with the book update
        let unchanged = store.find_membership(list.id, dune.book_id).unwrap().unwrap();
        assert_eq!(unchanged.status, Status::Unread);
        let book = store.find_book_by_isbn("9780441013593").unwrap().unwrap();
        assert_eq!(book.id, dune.book_id);
    }

    #[test]
    fn test_delete_membership() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let detail = store
            .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();

        let deleted = store
            .delete_membership(list.id, detail.book_id)
            .unwrap()
            .unwrap();
        assert_eq!(deleted.id, detail.id);
        assert_eq!(deleted.book.title, "Dune");
        assert_eq!(deleted.list.name, "Sci-Fi");

        assert!(store
            .delete_membership(list.id, detail.book_id)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_delete_membership_drops_notes() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let detail = store
            .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();
        store.insert_note(detail.id, "first impression").unwrap();

        store.delete_membership(list.id, detail.book_id).unwrap();

        // Re-adding the same book yields a fresh membership with no notes
        let fresh = store
            .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();
        assert_ne!(fresh.id, detail.id);
        assert!(fresh.notes.is_empty());
    }

    #[test]
    fn test_insert_note_and_fetch_order() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        let detail = store
            .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();

        let first = store.insert_note(detail.id, "the spice must flow").unwrap();
        let second = store.insert_note(detail.id, "fear is the mind-killer").unwrap();
        assert_eq!(first.membership_id, detail.id);

        let notes = store.notes_for_membership(detail.id).unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, first.id);
        assert_eq!(notes[1].id, second.id);
    }

    #[test]
    fn test_list_detail_orders_memberships_newest_first() {
        let mut store = test_store();

        let list = store.insert_list("Sci-Fi").unwrap();
        store
            .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
            .unwrap();
        sleep(Duration::from_millis(5));
        store
            .add_book_to_list(list.id, "9780553293357", "Foundation", "Isaac Asimov")
            .unwrap();

        let detail = store.get_list_detail(list.id).unwrap().unwrap();
        assert_eq!(detail.books.len(), 2);
        assert_eq!(detail.books[0].book.title, "Foundation");
        assert_eq!(detail.books[1].book.title, "Dune");
    }

    #[test]
    fn test_all_list_details_orders_newest_first() {
        let mut store = test_store();

        store.insert_list("First").unwrap();
        sleep(Duration::from_millis(5));
        store.insert_list("Second").unwrap();

        let lists = store.all_list_details().unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].name, "Second");
        assert_eq!(lists[1].name, "First");
    }

    #[test]
    fn test_data_persists_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        };

        let list_id;
        {
            let mut store = Store::open(&config).unwrap();
            let list = store.insert_list("Persistent").unwrap();
            list_id = list.id;
            store
                .add_book_to_list(list.id, "9780441013593", "Dune", "Frank Herbert")
                .unwrap();
        }

        let store = Store::open(&config).unwrap();
        let detail = store.get_list_detail(list_id).unwrap().unwrap();
        assert_eq!(detail.name, "Persistent");
        assert_eq!(detail.books.len(), 1);
        assert_eq!(detail.books[0].book.title, "Dune");
    }
}
