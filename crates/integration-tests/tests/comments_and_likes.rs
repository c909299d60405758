//! Embedded comment appends and like-set toggles, including the stale-flag
//! idempotence the set semantics guarantee.

use integration_tests::{comment_draft, memory_repo, post_draft};
use ss_content::ContentRepository;
use ss_core::{AppError, CommentDraft, MockDocumentStore};
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn comments_append_in_order_with_distinct_ids() {
    let (repo, _) = memory_repo();
    let post = repo.create_post(post_draft("author", "a post")).await.unwrap();

    let c1 = repo.add_comment(post.id, comment_draft("u2", "first!")).await.unwrap();
    let c2 = repo.add_comment(post.id, comment_draft("u3", "second")).await.unwrap();
    assert_ne!(c1.id, c2.id);

    let post = repo.get_post(post.id).await.unwrap();
    assert_eq!(post.comments.len(), 2);
    assert_eq!(post.comments[0], c1);
    assert_eq!(post.comments[1], c2);
}

#[tokio::test]
async fn commenting_on_a_missing_post_issues_no_write() {
    let mut mock = MockDocumentStore::new();
    mock.expect_get().times(1).returning(|_, _| Ok(None));
    mock.expect_update().times(0);
    let repo = ContentRepository::new(Arc::new(mock));

    let err = repo
        .add_comment(Uuid::now_v7(), comment_draft("u1", "hello?"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_, _)));
}

#[tokio::test]
async fn incomplete_comment_drafts_never_reach_the_store() {
    let repo = ContentRepository::new(Arc::new(MockDocumentStore::new()));
    let draft = CommentDraft { content: "text".into(), ..Default::default() };
    let err = repo.add_comment(Uuid::now_v7(), draft).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn like_toggle_round_trips_to_the_original_state() {
    let (repo, _) = memory_repo();
    let post = repo.create_post(post_draft("author", "likeable")).await.unwrap();

    repo.toggle_like(post.id, "u9", false).await.unwrap();
    assert!(repo.get_post(post.id).await.unwrap().liked_by("u9"));

    repo.toggle_like(post.id, "u9", true).await.unwrap();
    let post = repo.get_post(post.id).await.unwrap();
    assert!(!post.liked_by("u9"));
    assert_eq!(post.like_count(), 0);
}

#[tokio::test]
async fn stale_like_flags_cannot_duplicate_membership() {
    let (repo, _) = memory_repo();
    let post = repo.create_post(post_draft("author", "double tap")).await.unwrap();

    // Two tabs, both believing the post is unliked.
    repo.toggle_like(post.id, "u9", false).await.unwrap();
    repo.toggle_like(post.id, "u9", false).await.unwrap();

    let post = repo.get_post(post.id).await.unwrap();
    assert_eq!(post.likes, vec!["u9".to_string()]);

    // Removing an absent member is likewise a no-op.
    repo.toggle_like(post.id, "ghost", true).await.unwrap();
    assert_eq!(repo.get_post(post.id).await.unwrap().like_count(), 1);
}

#[tokio::test]
async fn liking_a_missing_post_is_not_found() {
    let (repo, _) = memory_repo();
    let err = repo.toggle_like(Uuid::now_v7(), "u1", false).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_, _)));
}
