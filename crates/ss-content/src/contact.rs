//! # Contact Desk
//!
//! One-shot support submissions. Messages land in the `contacts` collection
//! with status "new" and are never read or mutated again by this system.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use ss_core::{AppError, ContactDraft, DocumentStore, Result, WriteValue};
use std::sync::Arc;
use uuid::Uuid;

const CONTACTS: &str = "contacts";
const STATUS_NEW: &str = "new";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone)]
pub struct ContactDesk {
    store: Arc<dyn DocumentStore>,
}

impl ContactDesk {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Persists a contact message and returns its identifier.
    pub async fn submit(&self, draft: ContactDraft) -> Result<Uuid> {
        if draft.name.trim().is_empty()
            || draft.email.trim().is_empty()
            || draft.message.trim().is_empty()
        {
            return Err(AppError::ValidationError("all fields are required".into()));
        }
        if !EMAIL_PATTERN.is_match(draft.email.trim()) {
            return Err(AppError::ValidationError(
                "please enter a valid email address".into(),
            ));
        }

        let fields = vec![
            ("name".into(), WriteValue::Json(json!(draft.name))),
            ("email".into(), WriteValue::Json(json!(draft.email))),
            ("message".into(), WriteValue::Json(json!(draft.message))),
            ("status".into(), WriteValue::Json(json!(STATUS_NEW))),
            ("created_at".into(), WriteValue::ServerTimestamp),
        ];
        let id = self.store.insert(CONTACTS, fields).await?;
        Ok(id)
    }
}
