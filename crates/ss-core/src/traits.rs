//! # Core Traits (Ports)
//!
//! Any store adapter must implement these traits to be used by the binary.

use crate::document::{Document, FieldOp, WriteValue};
use crate::error::StoreResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence contract against the external document store.
///
/// One collection holds one kind of document; documents are addressed by
/// collection name and store-assigned identifier. Updates must be atomic per
/// document: two concurrent array mutations on the same document may not lose
/// either write.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates a document and returns its store-assigned identifier.
    /// `ServerTimestamp` writes resolve to the store's commit clock.
    async fn insert(
        &self,
        collection: &str,
        fields: Vec<(String, WriteValue)>,
    ) -> StoreResult<Uuid>;

    /// Fetches one document, `None` when absent.
    async fn get(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>>;

    /// All documents of a collection, newest creation first.
    async fn list_by_created_desc(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Applies field mutations to an existing document.
    /// Fails with [`crate::error::StoreError::MissingDocument`] when absent.
    async fn update(&self, collection: &str, id: Uuid, ops: Vec<FieldOp>) -> StoreResult<()>;

    /// Removes a document. Deleting an absent document is a no-op.
    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<()>;
}
