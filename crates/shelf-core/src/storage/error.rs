//! Storage error handling
//!
//! Provides typed errors for storage operations with path context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create data directory
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to open the database file
    #[error("Failed to open database '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_directory_display() {
        let err = StorageError::CreateDirectory {
            path: PathBuf::from("/no/such/dir"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("Failed to create data directory"));
        assert!(msg.contains("/no/such/dir"));
    }

    #[test]
    fn test_open_display() {
        let err = StorageError::Open {
            path: PathBuf::from("/data/shelf.db"),
            source: rusqlite::Error::InvalidQuery,
        };

        let msg = err.to_string();
        assert!(msg.contains("Failed to open database"));
        assert!(msg.contains("/data/shelf.db"));
    }

    #[test]
    fn test_database_from_rusqlite() {
        let err: StorageError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, StorageError::Database(_)));
        assert!(err.to_string().contains("Database error"));
    }
}
