//! Data models for Shelf
//!
//! Defines the core data structures: List, Book, ListBook (a membership of a
//! book in a list), BookNote, and the reading Status enum. All wire
//! serialization is camelCase JSON.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reading status of a book within a list.
///
/// Encoded on the wire as the strings "0", "1" and "2". Ordering follows the
/// encoding, so Unread < InProgress < Finished.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    #[serde(rename = "0")]
    Unread,
    #[serde(rename = "1")]
    InProgress,
    #[serde(rename = "2")]
    Finished,
}

/// A status string that is not one of the three known encodings
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("invalid status value: {0}")]
pub struct InvalidStatus(pub String);

impl Status {
    /// The wire encoding of this status
    pub fn code(&self) -> &'static str {
        match self {
            Status::Unread => "0",
            Status::InProgress => "1",
            Status::Finished => "2",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Status::Unread => "Unread",
            Status::InProgress => "In Progress",
            Status::Finished => "Finished",
        }
    }

    /// All statuses in encoding order
    pub fn all() -> [Status; 3] {
        [Status::Unread, Status::InProgress, Status::Finished]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Status {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Status::Unread),
            "1" => Ok(Status::InProgress),
            "2" => Ok(Status::Finished),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Unread
    }
}

/// A named reading list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// When this list was created
    pub created_at: DateTime<Utc>,
    /// When this list was last updated
    pub updated_at: DateTime<Utc>,
}

impl List {
    /// Create a list with a known id (for loading from storage and tests)
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }
}

/// A book, deduplicated globally by ISBN
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier
    pub id: i64,
    /// ISBN, unique across all books
    pub isbn: String,
    /// Display title
    pub title: String,
    /// Author name
    pub author: String,
    /// When this book was created
    pub created_at: DateTime<Utc>,
    /// When this book was last updated
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Create a book with a known id (for loading from storage and tests)
    pub fn new(
        id: i64,
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A membership of a book in a list, carrying the reading status.
///
/// Unique per (listId, bookId) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListBook {
    /// Unique identifier
    pub id: i64,
    /// The list this membership belongs to
    pub list_id: i64,
    /// The book this membership refers to
    pub book_id: i64,
    /// Reading status within this list
    pub status: Status,
    /// When this membership was created
    pub created_at: DateTime<Utc>,
    /// When this membership was last updated
    pub updated_at: DateTime<Utc>,
}

impl ListBook {
    /// Create a membership with a known id (for loading from storage and tests)
    pub fn new(id: i64, list_id: i64, book_id: i64, status: Status) -> Self {
        let now = Utc::now();
        Self {
            id,
            list_id,
            book_id,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A free-text note attached to a membership.
///
/// Notes are scoped to a ListBook, not to a Book: the same book on two lists
/// has two independent note threads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookNote {
    /// Unique identifier
    pub id: i64,
    /// The membership this note is attached to
    pub membership_id: i64,
    /// Note text
    pub note: String,
    /// When this note was created
    pub created_at: DateTime<Utc>,
    /// When this note was last updated
    pub updated_at: DateTime<Utc>,
}

impl BookNote {
    /// Create a note with a known id (for loading from storage and tests)
    pub fn new(id: i64, membership_id: i64, note: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            membership_id,
            note: note.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A membership hydrated with its book, owning list and notes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListBookDetail {
    /// Membership identifier
    pub id: i64,
    /// The list this membership belongs to
    pub list_id: i64,
    /// The book this membership refers to
    pub book_id: i64,
    /// Reading status within this list
    pub status: Status,
    /// When this membership was created
    pub created_at: DateTime<Utc>,
    /// When this membership was last updated
    pub updated_at: DateTime<Utc>,
    /// The full book record
    pub book: Book,
    /// The owning list record
    pub list: List,
    /// Notes attached to this membership, oldest first
    pub notes: Vec<BookNote>,
}

impl ListBookDetail {
    /// The bare membership row, without the hydrated relations
    pub fn membership(&self) -> ListBook {
        ListBook {
            id: self.id,
            list_id: self.list_id,
            book_id: self.book_id,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A list hydrated with its memberships
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListDetail {
    /// List identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// When this list was created
    pub created_at: DateTime<Utc>,
    /// When this list was last updated
    pub updated_at: DateTime<Utc>,
    /// Memberships on this list, newest first
    pub books: Vec<ListBookDetail>,
}

impl ListDetail {
    /// The bare list row, without the hydrated memberships
    pub fn list(&self) -> List {
        List {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Number of books on the list
    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Unread.code(), "0");
        assert_eq!(Status::InProgress.code(), "1");
        assert_eq!(Status::Finished.code(), "2");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Unread.label(), "Unread");
        assert_eq!(Status::InProgress.label(), "In Progress");
        assert_eq!(Status::Finished.label(), "Finished");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("0".parse::<Status>().unwrap(), Status::Unread);
        assert_eq!("1".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("2".parse::<Status>().unwrap(), Status::Finished);
        assert!("3".parse::<Status>().is_err());
        assert!("Unread".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_ordering() {
        assert!(Status::Unread < Status::InProgress);
        assert!(Status::InProgress < Status::Finished);
    }

    #[test]
    fn test_status_serializes_as_code() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"1\"");
        let status: Status = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(status, Status::Finished);
    }

    #[test]
    fn test_list_set_name() {
        let mut list = List::new(1, "Sci-Fi");
        let original_updated = list.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(10));
        list.set_name("Science Fiction");
        assert_eq!(list.name, "Science Fiction");
        assert!(list.updated_at > original_updated);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let book = Book::new(7, "9780441013593", "Dune", "Frank Herbert");
        let membership = ListBookDetail {
            id: 3,
            list_id: 1,
            book_id: 7,
            status: Status::Unread,
            created_at: book.created_at,
            updated_at: book.updated_at,
            book: book.clone(),
            list: List::new(1, "Sci-Fi"),
            notes: vec![BookNote::new(9, 3, "start with the appendix")],
        };
        let value = serde_json::to_value(&membership).unwrap();
        assert!(value.get("listId").is_some());
        assert!(value.get("bookId").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["status"], "0");
        assert!(value["notes"][0].get("membershipId").is_some());
    }

    #[test]
    fn test_detail_accessors() {
        let list = List::new(4, "History");
        let detail = ListDetail {
            id: list.id,
            name: list.name.clone(),
            created_at: list.created_at,
            updated_at: list.updated_at,
            books: Vec::new(),
        };
        assert_eq!(detail.list(), list);
        assert_eq!(detail.book_count(), 0);
    }

    #[test]
    fn test_membership_accessor() {
        let book = Book::new(2, "9780553293357", "Foundation", "Isaac Asimov");
        let detail = ListBookDetail {
            id: 11,
            list_id: 5,
            book_id: 2,
            status: Status::Finished,
            created_at: book.created_at,
            updated_at: book.updated_at,
            book,
            list: List::new(5, "Classics"),
            notes: Vec::new(),
        };
        let membership = detail.membership();
        assert_eq!(membership.id, 11);
        assert_eq!(membership.list_id, 5);
        assert_eq!(membership.book_id, 2);
        assert_eq!(membership.status, Status::Finished);
    }

    #[test]
    fn test_book_serialization_round_trip() {
        let book = Book::new(1, "9780441013593", "Dune", "Frank Herbert");
        let json = serde_json::to_string(&book).unwrap();
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }
}
