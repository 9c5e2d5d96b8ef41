//! HTTP wire types
//!
//! Request bodies and response envelopes shared by the server and the CLI
//! client, JSON-encoded with camelCase keys. Body fields are optional so that
//! presence checking happens in the service layer, which owns the validation
//! messages.

use serde::{Deserialize, Serialize};

use crate::models::{BookNote, List, ListBookDetail, ListDetail};

// ==================== Request bodies ====================

/// Body of list create and rename requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNameBody {
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of an add-book request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
}

/// Body of a combined status-and-book update request
///
/// `status` stays a raw string here; the service layer parses it so an
/// unknown encoding is rejected with the validation message rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
}

/// Body of an add-note request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNoteBody {
    #[serde(default)]
    pub note: Option<String>,
}

// ==================== Response envelopes ====================

/// Error envelope returned for any failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub success: bool,
    pub msg: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: msg.into(),
        }
    }
}

/// Envelope carrying one hydrated list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListDetail>,
}

impl ListResponse {
    pub fn ok(list: ListDetail) -> Self {
        Self {
            success: true,
            msg: None,
            list: Some(list),
        }
    }
}

/// Envelope carrying the full list collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListsResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<ListDetail>>,
}

impl ListsResponse {
    pub fn ok(lists: Vec<ListDetail>) -> Self {
        Self {
            success: true,
            msg: None,
            lists: Some(lists),
        }
    }
}

/// Envelope carrying a deleted list's bare row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedListResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<List>,
}

impl DeletedListResponse {
    pub fn ok(list: List) -> Self {
        Self {
            success: true,
            msg: None,
            list: Some(list),
        }
    }
}

/// Envelope carrying one hydrated membership under the `book` key
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<ListBookDetail>,
}

impl BookResponse {
    pub fn ok(book: ListBookDetail) -> Self {
        Self {
            success: true,
            msg: None,
            book: Some(book),
        }
    }

    /// Deletion response, carrying the confirmation message
    pub fn deleted(msg: impl Into<String>, book: ListBookDetail) -> Self {
        Self {
            success: true,
            msg: Some(msg.into()),
            book: Some(book),
        }
    }
}

/// Envelope carrying one note
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<BookNote>,
}

impl NoteResponse {
    pub fn ok(note: BookNote) -> Self {
        Self {
            success: true,
            msg: None,
            note: Some(note),
        }
    }
}
