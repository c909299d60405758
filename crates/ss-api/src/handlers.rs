//! # ss-api Handlers
//!
//! One handler per repository operation. Handlers own the concerns the
//! repository deliberately leaves to its caller: identity, the author-only
//! delete rule, list narrowing, and user-facing error wording.

use crate::error::ApiError;
use crate::identity::Identity;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use ss_content::{filter_posts, ContactDesk, ContentRepository};
use ss_core::{AppError, CategoryFilter, CommentDraft, ContactDraft, PostDraft};
use uuid::Uuid;

const CREATE_DENIED: &str =
    "You do not have permission to create posts. Please make sure you are logged in.";
const CREATE_FAILED: &str = "Failed to create post. Please try again.";
const COMMENT_DENIED: &str = "You must be logged in to comment";
const COMMENT_FAILED: &str = "Failed to add comment. Please try again.";
const CONTACT_DENIED: &str = "Server configuration error. Please try again later.";

/// State shared across all workers.
pub struct AppState {
    pub content: ContentRepository,
    pub contact: ContactDesk,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    pub title: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    /// The caller's believed current state, as in the original toggle.
    pub currently_liked: bool,
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let draft = PostDraft {
        author_id: identity.user_id,
        author_name: identity.display_name,
        content: body.content,
        title: body.title,
        category: body.category,
        skills: body.skills,
        image_url: body.image_url,
    };
    let post = state
        .content
        .create_post(draft)
        .await
        .map_err(|e| ApiError::reworded(e, CREATE_DENIED, Some(CREATE_FAILED)))?;
    Ok(HttpResponse::Created().json(post))
}

pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let filter = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => raw.parse().map_err(|_| {
            AppError::ValidationError(format!("unknown category filter: {raw}"))
        })?,
    };
    let search = query.q.as_deref().unwrap_or("");

    let posts = state.content.list_posts().await?;
    Ok(HttpResponse::Ok().json(filter_posts(posts, &filter, search)))
}

pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let post = state.content.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Deletion is author-only; the repository itself enforces no ownership, so
/// the check lives here with the rest of the caller-side trust boundary.
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let post = state.content.get_post(id).await?;
    if post.author_id != identity.user_id {
        return Err(ApiError::Forbidden("only the author can delete a post"));
    }
    state.content.delete_post(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<CommentRequest>,
) -> Result<HttpResponse, ApiError> {
    let draft = CommentDraft {
        content: body.into_inner().content,
        author_id: identity.user_id,
        author_name: identity.display_name,
    };
    let comment = state
        .content
        .add_comment(path.into_inner(), draft)
        .await
        .map_err(|e| ApiError::reworded(e, COMMENT_DENIED, Some(COMMENT_FAILED)))?;
    Ok(HttpResponse::Created().json(comment))
}

pub async fn toggle_like(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<LikeRequest>,
) -> Result<HttpResponse, ApiError> {
    state
        .content
        .toggle_like(path.into_inner(), &identity.user_id, body.currently_liked)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Open to anonymous visitors; no identity assertion required.
pub async fn submit_contact(
    state: web::Data<AppState>,
    body: web::Json<ContactRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let draft = ContactDraft { name: body.name, email: body.email, message: body.message };
    let id = state
        .contact
        .submit(draft)
        .await
        .map_err(|e| ApiError::reworded(e, CONTACT_DENIED, None))?;
    Ok(HttpResponse::Created().json(json!({ "id": id })))
}
