//! # ss-store-memory
//!
//! In-process implementation of `DocumentStore` over a concurrent map.
//! Backs tests and dev mode; nothing survives a restart.
//!
//! Per-document atomicity comes from the map's exclusive entry access: an
//! update holds the entry for the whole mutation, so concurrent array ops on
//! the same document serialize instead of losing writes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::{Map, Value};
use ss_core::{apply_ops, resolve_write, Document, DocumentStore, FieldOp, StoreError, StoreResult, WriteValue};
use uuid::Uuid;

struct Entry {
    fields: Map<String, Value>,
    /// Commit clock at insert, used for list ordering.
    created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct MemoryDocumentStore {
    docs: DashMap<(String, Uuid), Entry>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(
        &self,
        collection: &str,
        fields: Vec<(String, WriteValue)>,
    ) -> StoreResult<Uuid> {
        let now = Utc::now();
        let id = Uuid::now_v7();
        let mut body = Map::new();
        for (field, value) in fields {
            body.insert(field, resolve_write(value, now));
        }
        self.docs
            .insert((collection.to_string(), id), Entry { fields: body, created_at: now });
        Ok(id)
    }

    async fn get(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>> {
        Ok(self
            .docs
            .get(&(collection.to_string(), id))
            .map(|entry| Document { id, fields: entry.fields.clone() }))
    }

    async fn list_by_created_desc(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let mut rows: Vec<(DateTime<Utc>, Document)> = self
            .docs
            .iter()
            .filter(|kv| kv.key().0 == collection)
            .map(|kv| {
                let (_, id) = kv.key();
                (kv.value().created_at, Document { id: *id, fields: kv.value().fields.clone() })
            })
            .collect();
        // v7 ids break commit-time ties deterministically.
        rows.sort_by(|a, b| (b.0, b.1.id).cmp(&(a.0, a.1.id)));
        Ok(rows.into_iter().map(|(_, doc)| doc).collect())
    }

    async fn update(&self, collection: &str, id: Uuid, ops: Vec<FieldOp>) -> StoreResult<()> {
        let key = (collection.to_string(), id);
        match self.docs.get_mut(&key) {
            Some(mut entry) => {
                apply_ops(&mut entry.fields, ops, Utc::now());
                Ok(())
            }
            None => Err(StoreError::MissingDocument(collection.to_string(), id)),
        }
    }

    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<()> {
        self.docs.remove(&(collection.to_string(), id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> MemoryDocumentStore {
        MemoryDocumentStore::new()
    }

    #[tokio::test]
    async fn insert_resolves_server_timestamps_and_get_returns_body() {
        let store = store();
        let id = store
            .insert(
                "posts",
                vec![
                    ("content".into(), WriteValue::Json(json!("hi"))),
                    ("created_at".into(), WriteValue::ServerTimestamp),
                ],
            )
            .await
            .unwrap();

        let doc = store.get("posts", id).await.unwrap().unwrap();
        assert_eq!(doc.fields["content"], json!("hi"));
        assert!(doc.fields["created_at"].is_string());
    }

    #[tokio::test]
    async fn listing_is_newest_first_per_collection() {
        let store = store();
        let a = store.insert("posts", vec![]).await.unwrap();
        let b = store.insert("posts", vec![]).await.unwrap();
        store.insert("contacts", vec![]).await.unwrap();

        let ids: Vec<Uuid> = store
            .list_by_created_desc("posts")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[tokio::test]
    async fn array_union_and_remove_keep_set_semantics() {
        let store = store();
        let id = store.insert("posts", vec![]).await.unwrap();

        for _ in 0..2 {
            store
                .update(
                    "posts",
                    id,
                    vec![FieldOp::ArrayUnion { field: "likes".into(), value: json!("u1") }],
                )
                .await
                .unwrap();
        }
        let doc = store.get("posts", id).await.unwrap().unwrap();
        assert_eq!(doc.fields["likes"], json!(["u1"]));

        store
            .update(
                "posts",
                id,
                vec![FieldOp::ArrayRemove { field: "likes".into(), value: json!("u1") }],
            )
            .await
            .unwrap();
        let doc = store.get("posts", id).await.unwrap().unwrap();
        assert_eq!(doc.fields["likes"], json!([]));
    }

    #[tokio::test]
    async fn update_on_absent_document_is_missing_document() {
        let store = store();
        let err = store
            .update("posts", Uuid::now_v7(), vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingDocument(_, _)));
    }

    #[tokio::test]
    async fn delete_is_silent_on_absent_documents() {
        let store = store();
        store.delete("posts", Uuid::now_v7()).await.unwrap();
    }
}
