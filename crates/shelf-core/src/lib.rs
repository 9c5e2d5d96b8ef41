//! Shelf Core Library
//!
//! This crate provides the core functionality for Shelf, a personal
//! reading-list manager built on a local SQLite database.
//!
//! # Architecture
//!
//! - **SQLite**: Source of truth for lists, books, memberships and notes
//!
//! Services validate input and return hydrated rows; the store owns all SQL.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open(&config)?;
//!
//! // Create a list and shelve a book
//! let list = services::lists::create(&mut store, Some("Sci-Fi"))?;
//! let book = services::memberships::add_book(
//!     &mut store,
//!     list.id,
//!     Some("Dune"),
//!     Some("Frank Herbert"),
//!     Some("9780441172719"),
//! )?;
//!
//! // Query lists
//! let lists = services::lists::all(&mut store)?;
//! ```
//!
//! # Modules
//!
//! - `store`: Unified storage interface (main entry point)
//! - `models`: Data structures for lists, books, memberships and notes
//! - `services`: Validation and lookup rules on top of the store
//! - `view`: Immutable client-side snapshots of server state
//! - `export`: Flattened YAML documents for download and pantry upload
//! - `api`: HTTP request and response wire types
//! - `client`: Typed HTTP client for the shelf server
//! - `storage`: SQLite schema and storage errors
//! - `config`: Application configuration

pub mod api;
pub mod client;
pub mod config;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;
pub mod view;

pub use client::ApiClient;
pub use config::Config;
pub use export::{ExportDocument, ExportOptions};
pub use models::{Book, BookNote, List, ListBook, ListBookDetail, ListDetail, Status};
pub use services::{DeleteOutcome, ServiceError, ServiceResult};
pub use storage::{StorageError, StorageResult};
pub use store::Store;
pub use view::{HomeView, ListView, SortOrder};
