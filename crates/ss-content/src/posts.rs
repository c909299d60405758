//! # Post Repository
//!
//! Create/read/mutate/delete operations over `posts` documents and their
//! embedded comment sequences and like sets.

use chrono::Utc;
use serde_json::json;
use ss_core::{
    AppError, Comment, CommentDraft, Document, DocumentStore, FieldOp, Post, PostDraft, Result,
    StoreError, WriteValue,
};
use std::sync::Arc;
use uuid::Uuid;

const POSTS: &str = "posts";

/// Facade over the injected store handle. Cheap to clone and share.
#[derive(Clone)]
pub struct ContentRepository {
    store: Arc<dyn DocumentStore>,
}

impl ContentRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Creates a post and returns it as persisted.
    ///
    /// # Developer Note
    /// The created document is re-read before returning so the caller
    /// receives exactly the persisted shape, store-assigned timestamps
    /// included, rather than a client-side approximation.
    pub async fn create_post(&self, draft: PostDraft) -> Result<Post> {
        let author_id = draft.author_id.trim();
        if author_id.is_empty() {
            return Err(AppError::ValidationError("author ID is required".into()));
        }
        let content = draft.content.trim();
        if content.is_empty() {
            return Err(AppError::ValidationError("post content is required".into()));
        }

        let title = draft.title.unwrap_or_default().trim().to_string();
        let fields = vec![
            ("author_id".into(), WriteValue::Json(json!(author_id))),
            ("author_name".into(), WriteValue::Json(json!(draft.author_name))),
            ("title".into(), WriteValue::Json(json!(title))),
            ("content".into(), WriteValue::Json(json!(content))),
            ("category".into(), WriteValue::Json(json!(draft.category))),
            ("skills".into(), WriteValue::Json(json!(normalize_skills(draft.skills)))),
            ("image_url".into(), WriteValue::Json(json!(draft.image_url))),
            ("likes".into(), WriteValue::Json(json!([]))),
            ("comments".into(), WriteValue::Json(json!([]))),
            ("created_at".into(), WriteValue::ServerTimestamp),
            ("updated_at".into(), WriteValue::ServerTimestamp),
        ];

        let id = self.store.insert(POSTS, fields).await?;
        let doc = self
            .store
            .get(POSTS, id)
            .await?
            .ok_or(StoreError::MissingDocument(POSTS.to_string(), id))?;
        decode_post(doc)
    }

    /// All posts, newest first. Category/search narrowing is a pure
    /// client-side predicate over this full result set, see [`crate::filter`].
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let docs = self.store.list_by_created_desc(POSTS).await?;
        docs.into_iter().map(decode_post).collect()
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post> {
        match self.store.get(POSTS, id).await? {
            Some(doc) => decode_post(doc),
            None => Err(AppError::NotFound("Post".into(), id.to_string())),
        }
    }

    /// Appends a comment to an existing post and returns it, generated
    /// identifier included.
    ///
    /// The parent lookup is a liveness check only; the append itself relies
    /// on the store's atomic array union, not on the snapshot read here.
    pub async fn add_comment(&self, post_id: Uuid, draft: CommentDraft) -> Result<Comment> {
        if draft.content.trim().is_empty()
            || draft.author_id.trim().is_empty()
            || draft.author_name.trim().is_empty()
        {
            return Err(AppError::ValidationError(
                "comment must include content, author ID and author name".into(),
            ));
        }

        if self.store.get(POSTS, post_id).await?.is_none() {
            return Err(AppError::NotFound("Post".into(), post_id.to_string()));
        }

        let comment = Comment {
            id: Uuid::new_v4(),
            content: draft.content,
            author_id: draft.author_id,
            author_name: draft.author_name,
            created_at: Utc::now(),
        };
        let encoded = serde_json::to_value(&comment)
            .map_err(|e| StoreError::Backend(format!("comment encoding failed: {e}")))?;

        self.store
            .update(
                POSTS,
                post_id,
                vec![FieldOp::ArrayUnion { field: "comments".into(), value: encoded }],
            )
            .await
            .map_err(|e| not_found_on_missing(e, post_id))?;

        Ok(comment)
    }

    /// Adds or removes `user_id` from the post's like set, driven by the
    /// caller's believed current state. Set semantics make either direction
    /// idempotent, so a stale flag cannot corrupt the set.
    pub async fn toggle_like(
        &self,
        post_id: Uuid,
        user_id: &str,
        currently_liked: bool,
    ) -> Result<()> {
        let op = if currently_liked {
            FieldOp::ArrayRemove { field: "likes".into(), value: json!(user_id) }
        } else {
            FieldOp::ArrayUnion { field: "likes".into(), value: json!(user_id) }
        };

        self.store
            .update(POSTS, post_id, vec![op])
            .await
            .map_err(|e| not_found_on_missing(e, post_id))?;
        Ok(())
    }

    /// Irreversibly removes the post and, transitively, its embedded
    /// comments. Ownership is the caller's responsibility.
    pub async fn delete_post(&self, id: Uuid) -> Result<()> {
        self.store.delete(POSTS, id).await?;
        Ok(())
    }
}

fn decode_post(doc: Document) -> Result<Post> {
    let id = doc.id;
    let mut post: Post = serde_json::from_value(doc.into_value())
        .map_err(|e| StoreError::Backend(format!("malformed post document {id}: {e}")))?;
    post.id = id;
    Ok(post)
}

/// Entry-time skill cleanup: trimmed, blanks dropped, first occurrence wins.
fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for skill in skills {
        let skill = skill.trim();
        if !skill.is_empty() && !seen.iter().any(|s| s == skill) {
            seen.push(skill.to_string());
        }
    }
    seen
}

fn not_found_on_missing(err: StoreError, post_id: Uuid) -> AppError {
    match err {
        StoreError::MissingDocument(_, _) => AppError::NotFound("Post".into(), post_id.to_string()),
        other => AppError::Store(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss_core::MockDocumentStore;

    fn repo_with(mock: MockDocumentStore) -> ContentRepository {
        ContentRepository::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn create_post_rejects_missing_author_before_any_store_call() {
        // No expectations set: any store call panics the test.
        let repo = repo_with(MockDocumentStore::new());
        let draft = PostDraft { content: "hello".into(), ..Default::default() };
        let err = repo.create_post(draft).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn create_post_rejects_blank_content_before_any_store_call() {
        let repo = repo_with(MockDocumentStore::new());
        let draft = PostDraft {
            author_id: "u1".into(),
            content: "   ".into(),
            ..Default::default()
        };
        let err = repo.create_post(draft).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn add_comment_rejects_incomplete_drafts() {
        let repo = repo_with(MockDocumentStore::new());
        let draft = CommentDraft { content: "nice".into(), ..Default::default() };
        let err = repo.add_comment(Uuid::now_v7(), draft).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn skills_are_trimmed_and_deduplicated_in_order() {
        let skills = vec![
            " rust ".to_string(),
            "sql".to_string(),
            "rust".to_string(),
            "  ".to_string(),
        ];
        assert_eq!(normalize_skills(skills), vec!["rust".to_string(), "sql".to_string()]);
    }
}
