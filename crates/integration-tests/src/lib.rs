//! Shared fixtures for the black-box suites.

use ss_content::{ContactDesk, ContentRepository};
use ss_core::{CommentDraft, ContactDraft, PostDraft};
use ss_store_memory::MemoryDocumentStore;
use std::sync::Arc;

/// A repository over a fresh in-memory store, plus the store itself so tests
/// can inspect what was persisted.
pub fn memory_repo() -> (ContentRepository, Arc<MemoryDocumentStore>) {
    let store = Arc::new(MemoryDocumentStore::new());
    (ContentRepository::new(store.clone()), store)
}

pub fn memory_desk() -> (ContactDesk, Arc<MemoryDocumentStore>) {
    let store = Arc::new(MemoryDocumentStore::new());
    (ContactDesk::new(store.clone()), store)
}

pub fn post_draft(author_id: &str, content: &str) -> PostDraft {
    PostDraft {
        author_id: author_id.into(),
        author_name: format!("{author_id}-name"),
        content: content.into(),
        title: Some("a title".into()),
        category: Some("Idea".into()),
        skills: vec![],
        image_url: None,
    }
}

pub fn comment_draft(author_id: &str, content: &str) -> CommentDraft {
    CommentDraft {
        content: content.into(),
        author_id: author_id.into(),
        author_name: format!("{author_id}-name"),
    }
}

pub fn contact_draft(email: &str) -> ContactDraft {
    ContactDraft {
        name: "Visitor".into(),
        email: email.into(),
        message: "hello there".into(),
    }
}
