//! Export transform
//!
//! Flattens a hydrated list into the export document shape: each membership
//! collapses into its book's fields plus the membership's notes, dropping the
//! membership wrapper. Reading status stays out of the document unless the
//! options ask for it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BookNote, ListDetail, Status};

/// Options controlling the export transform
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Carry each membership's reading status into the document
    pub include_status: bool,
}

/// A flattened book entry in an export document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportBook {
    /// Book identifier
    pub id: i64,
    /// ISBN
    pub isbn: String,
    /// Display title
    pub title: String,
    /// Author name
    pub author: String,
    /// When the book was created
    pub created_at: DateTime<Utc>,
    /// When the book was last updated
    pub updated_at: DateTime<Utc>,
    /// Reading status, present only when the options include it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Notes travel with the entry, even when empty
    pub notes: Vec<BookNote>,
}

/// The export document for one list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// List identifier
    pub id: i64,
    /// List name
    pub name: String,
    /// When the list was created
    pub created_at: DateTime<Utc>,
    /// When the list was last updated
    pub updated_at: DateTime<Utc>,
    /// Flattened book entries
    pub books: Vec<ExportBook>,
}

/// Build the export document for a list
pub fn build_export_document(list: &ListDetail, options: ExportOptions) -> ExportDocument {
    let books = list
        .books
        .iter()
        .map(|membership| ExportBook {
            id: membership.book.id,
            isbn: membership.book.isbn.clone(),
            title: membership.book.title.clone(),
            author: membership.book.author.clone(),
            created_at: membership.book.created_at,
            updated_at: membership.book.updated_at,
            status: options.include_status.then_some(membership.status),
            notes: membership.notes.clone(),
        })
        .collect();

    ExportDocument {
        id: list.id,
        name: list.name.clone(),
        created_at: list.created_at,
        updated_at: list.updated_at,
        books,
    }
}

/// Serialize an export document to YAML
pub fn to_yaml(doc: &ExportDocument) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(doc)
}

/// Default file name for a list's YAML export
pub fn default_file_name(list_name: &str) -> String {
    format!("{} Reading List.yaml", list_name)
}
