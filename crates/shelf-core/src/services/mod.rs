//! Service layer
//!
//! Validation and orchestration over the `Store`. HTTP handlers call these
//! functions; all input checking happens here, before any storage mutation,
//! so a rejected request never leaves partial writes behind.

pub mod lists;
pub mod memberships;
pub mod notes;

use thiserror::Error;

use crate::storage::StorageError;

/// Errors produced by the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A request field is missing or unusable
    #[error("{0}")]
    Validation(String),

    /// The addressed entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// The storage layer failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result of a delete operation
///
/// Deleting something that is already gone is not an error; the transport
/// layer decides how to surface each case.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome<T> {
    /// The entity existed and was removed; carries the removed entity
    Deleted(T),
    /// Nothing to do, the entity was already gone
    AlreadyAbsent,
}

impl<T> DeleteOutcome<T> {
    /// The removed entity, if anything was removed
    pub fn deleted(self) -> Option<T> {
        match self {
            DeleteOutcome::Deleted(entity) => Some(entity),
            DeleteOutcome::AlreadyAbsent => None,
        }
    }
}
