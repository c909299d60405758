//! # AppError
//!
//! Centralized error handling for the Social Sphere ecosystem.
//! Every failure a repository operation can surface falls into one of three
//! kinds: validation (detected before any store call), not-found, or a store
//! failure re-raised from the adapter.

use thiserror::Error;
use uuid::Uuid;

/// The primary error type for all ss-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., Post)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., empty content, malformed email)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Failure originating from the external document store
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures raised by a [`crate::traits::DocumentStore`] adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store's access-control rules rejected the call.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// An update addressed a document that does not exist.
    #[error("no document {1} in collection {0}")]
    MissingDocument(String, Uuid),

    /// Anything else: connectivity, corrupt data, backend bugs.
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// A specialized Result type for Social Sphere logic.
pub type Result<T> = std::result::Result<T, AppError>;

/// Adapter-side Result alias.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
