//! Core error types used across the system

use thiserror::Error;

/// Error taxonomy for record operations
///
/// Every store operation reports its outcome through one of these kinds.
/// All of them are recoverable by the caller issuing a corrected request;
/// only `Storage` indicates a fault below the domain layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field in the request payload is malformed, of the wrong type,
    /// or violates a format rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced entity does not exist
    #[error("Reference not found: {0}")]
    ReferenceNotFound(String),

    /// A business ID collided on create
    #[error("Duplicate ID: {0}")]
    DuplicateId(String),

    /// The target record is absent on update/delete
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing store failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn reference_not_found(message: impl Into<String>) -> Self {
        CoreError::ReferenceNotFound(message.into())
    }

    pub fn duplicate_id(message: impl Into<String>) -> Self {
        CoreError::DuplicateId(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        CoreError::Storage(message.into())
    }

    /// The caller-facing message, without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation(m)
            | CoreError::ReferenceNotFound(m)
            | CoreError::DuplicateId(m)
            | CoreError::NotFound(m)
            | CoreError::Storage(m) => m,
        }
    }
}
