//! Storage layer
//!
//! SQLite persistence for lists, books, memberships and notes. The schema
//! lives in `schema`, typed errors in `error`; the `Store` in the crate root
//! builds on both.

pub mod error;
pub mod schema;

pub use error::{StorageError, StorageResult};
pub use schema::{get_schema_version, init_schema, needs_init, SCHEMA_VERSION};
