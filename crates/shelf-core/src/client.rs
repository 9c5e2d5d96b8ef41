//! API client implementation
//!
//! HTTP client for the shelf server's JSON API. Every method unwraps the
//! response envelope and surfaces server-side failures as errors carrying
//! the server's own message.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::StatusCode;
use tracing::debug;

use crate::api::{
    AddBookBody, AddNoteBody, BookResponse, DeletedListResponse, ErrorBody, ListNameBody,
    ListResponse, ListsResponse, NoteResponse, UpdateBookBody,
};
use crate::models::{BookNote, List, ListBookDetail, ListDetail, Status};
use crate::services::DeleteOutcome;

/// Request timeout for all API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed client for the shelf server
pub struct ApiClient {
    /// Server base URL, without a trailing slash
    base_url: String,
    /// Underlying HTTP client
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new client for the given server URL
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Get the server base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a new list
    pub async fn create_list(&self, name: &str) -> Result<ListDetail> {
        let url = self.endpoint("/list");
        debug!("POST {}", url);

        let body = ListNameBody {
            name: Some(name.to_string()),
        };
        let response = self.send(self.http.post(&url).json(&body)).await?;
        self.parse_list(response).await
    }

    /// Fetch every list, newest first
    pub async fn all_lists(&self) -> Result<Vec<ListDetail>> {
        let url = self.endpoint("/list");
        debug!("GET {}", url);

        let response = self.send(self.http.get(&url)).await?;
        if !response.status().is_success() {
            return Err(self.server_error(response).await);
        }

        let envelope: ListsResponse = response
            .json()
            .await
            .context("Failed to decode server response")?;
        envelope
            .lists
            .ok_or_else(|| anyhow!("Server response was missing the lists"))
    }

    /// Fetch one list with its books
    pub async fn get_list(&self, list_id: i64) -> Result<ListDetail> {
        let url = self.endpoint(&format!("/list/{}", list_id));
        debug!("GET {}", url);

        let response = self.send(self.http.get(&url)).await?;
        self.parse_list(response).await
    }

    /// Rename a list
    pub async fn rename_list(&self, list_id: i64, name: &str) -> Result<ListDetail> {
        let url = self.endpoint(&format!("/list/{}", list_id));
        debug!("PATCH {}", url);

        let body = ListNameBody {
            name: Some(name.to_string()),
        };
        let response = self.send(self.http.patch(&url).json(&body)).await?;
        self.parse_list(response).await
    }

    /// Delete a list
    ///
    /// Returns the deleted row, or `AlreadyAbsent` when the server had no
    /// such list.
    pub async fn delete_list(&self, list_id: i64) -> Result<DeleteOutcome<List>> {
        let url = self.endpoint(&format!("/list/{}", list_id));
        debug!("DELETE {}", url);

        let response = self.send(self.http.delete(&url)).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(DeleteOutcome::AlreadyAbsent);
        }
        if !response.status().is_success() {
            return Err(self.server_error(response).await);
        }

        let envelope: DeletedListResponse = response
            .json()
            .await
            .context("Failed to decode server response")?;
        let list = envelope
            .list
            .ok_or_else(|| anyhow!("Server response was missing the list"))?;
        Ok(DeleteOutcome::Deleted(list))
    }

    /// Add a book to a list
    pub async fn add_book(
        &self,
        list_id: i64,
        title: &str,
        author: &str,
        isbn: &str,
    ) -> Result<ListBookDetail> {
        let url = self.endpoint(&format!("/list/{}/book", list_id));
        debug!("POST {}", url);

        let body = AddBookBody {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            isbn: Some(isbn.to_string()),
        };
        let response = self.send(self.http.post(&url).json(&body)).await?;
        self.parse_book(response).await
    }

    /// Update a shelved book's status and fields
    pub async fn update_book(
        &self,
        list_id: i64,
        book_id: i64,
        status: Status,
        title: &str,
        author: &str,
        isbn: &str,
    ) -> Result<ListBookDetail> {
        let url = self.endpoint(&format!("/list/{}/book/{}", list_id, book_id));
        debug!("PUT {}", url);

        let body = UpdateBookBody {
            status: Some(status.code().to_string()),
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            isbn: Some(isbn.to_string()),
        };
        let response = self.send(self.http.put(&url).json(&body)).await?;
        self.parse_book(response).await
    }

    /// Remove a book from a list
    ///
    /// Returns the deleted membership, or `AlreadyAbsent` when the server
    /// had no such book on the list.
    pub async fn remove_book(
        &self,
        list_id: i64,
        book_id: i64,
    ) -> Result<DeleteOutcome<ListBookDetail>> {
        let url = self.endpoint(&format!("/list/{}/book/{}", list_id, book_id));
        debug!("DELETE {}", url);

        let response = self.send(self.http.delete(&url)).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(DeleteOutcome::AlreadyAbsent);
        }
        let book = self.parse_book(response).await?;
        Ok(DeleteOutcome::Deleted(book))
    }

    /// Add a note to a shelved book
    pub async fn add_note(&self, list_id: i64, book_id: i64, note: &str) -> Result<BookNote> {
        let url = self.endpoint(&format!("/list/{}/book/{}/note", list_id, book_id));
        debug!("POST {}", url);

        let body = AddNoteBody {
            note: Some(note.to_string()),
        };
        let response = self.send(self.http.post(&url).json(&body)).await?;
        if !response.status().is_success() {
            return Err(self.server_error(response).await);
        }

        let envelope: NoteResponse = response
            .json()
            .await
            .context("Failed to decode server response")?;
        envelope
            .note
            .ok_or_else(|| anyhow!("Server response was missing the note"))
    }

    /// Build a full URL for an endpoint path
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, mapping transport failures to an error naming the server
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        request
            .send()
            .await
            .with_context(|| format!("Failed to reach shelf server at {}", self.base_url))
    }

    /// Unwrap a list envelope
    async fn parse_list(&self, response: reqwest::Response) -> Result<ListDetail> {
        if !response.status().is_success() {
            return Err(self.server_error(response).await);
        }

        let envelope: ListResponse = response
            .json()
            .await
            .context("Failed to decode server response")?;
        envelope
            .list
            .ok_or_else(|| anyhow!("Server response was missing the list"))
    }

    /// Unwrap a book envelope
    async fn parse_book(&self, response: reqwest::Response) -> Result<ListBookDetail> {
        if !response.status().is_success() {
            return Err(self.server_error(response).await);
        }

        let envelope: BookResponse = response
            .json()
            .await
            .context("Failed to decode server response")?;
        envelope
            .book
            .ok_or_else(|| anyhow!("Server response was missing the book"))
    }

    /// Turn a failed response into an error carrying the server's message
    async fn server_error(&self, response: reqwest::Response) -> anyhow::Error {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => anyhow!("{}", body.msg),
            Err(_) => anyhow!("Server at {} returned {}", self.base_url, status),
        }
    }
}
