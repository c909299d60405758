//! # ss-store-sqlite
//!
//! SQLite-backed implementation of `DocumentStore`. Documents live as JSON
//! bodies keyed by collection and identifier; a creation-time column carries
//! the list ordering so it never depends on body contents.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Row;
use ss_core::{
    apply_ops, resolve_write, Document, DocumentStore, FieldOp, StoreError, StoreResult,
    WriteValue,
};
use std::str::FromStr;
use uuid::Uuid;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS documents (
    collection  TEXT NOT NULL,
    id          BLOB NOT NULL,
    body        TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    PRIMARY KEY (collection, id)
)";

pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Opens (and creates, if needed) the database and its schema.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(backend)?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await.map_err(backend)?;
        sqlx::query(SCHEMA).execute(&pool).await.map_err(backend)?;
        log::debug!("sqlite document store ready at {url}");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
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

        sqlx::query(
            "INSERT INTO documents (collection, id, body, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(collection)
        .bind(id)
        .bind(Value::Object(body).to_string())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        Ok(id)
    }

    async fn get(&self, collection: &str, id: Uuid) -> StoreResult<Option<Document>> {
        let row = sqlx::query("SELECT body FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        match row {
            Some(row) => Ok(Some(Document { id, fields: decode_body(&row.get::<String, _>("body"))? })),
            None => Ok(None),
        }
    }

    async fn list_by_created_desc(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let rows = sqlx::query(
            "SELECT id, body FROM documents WHERE collection = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        rows.into_iter()
            .map(|row| {
                Ok(Document {
                    id: row.get("id"),
                    fields: decode_body(&row.get::<String, _>("body"))?,
                })
            })
            .collect()
    }

    /// Read-modify-write of the JSON body inside one transaction, which is
    /// what makes concurrent array mutations on a document safe here.
    async fn update(&self, collection: &str, id: Uuid, ops: Vec<FieldOp>) -> StoreResult<()> {
        let mut tx = self.pool.begin().await.map_err(backend)?;

        let row = sqlx::query("SELECT body FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(backend)?;
        let Some(row) = row else {
            return Err(StoreError::MissingDocument(collection.to_string(), id));
        };

        let mut fields = decode_body(&row.get::<String, _>("body"))?;
        apply_ops(&mut fields, ops, Utc::now());

        sqlx::query("UPDATE documents SET body = ? WHERE collection = ? AND id = ?")
            .bind(Value::Object(fields).to_string())
            .bind(collection)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(backend)?;

        tx.commit().await.map_err(backend)?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<()> {
        sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }
}

fn decode_body(body: &str) -> StoreResult<Map<String, Value>> {
    match serde_json::from_str(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(StoreError::Backend("document body is not a JSON object".into())),
        Err(e) => Err(StoreError::Backend(format!("document body unreadable: {e}"))),
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}
