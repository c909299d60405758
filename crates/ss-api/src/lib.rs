//! # ss-api
//!
//! The web routing and orchestration layer for Social Sphere.

pub mod error;
pub mod handlers;
pub mod identity;
pub mod middleware;

pub use error::ApiError;
pub use handlers::AppState;
pub use identity::Identity;

use actix_web::web;

/// Configures the JSON API routes.
///
/// # Developer Note
/// We use a scoped configuration to allow the main binary to mount
/// the API under different paths if needed (e.g., /api/v1/).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/posts", web::get().to(handlers::list_posts))
            .route("/posts", web::post().to(handlers::create_post))
            .route("/posts/{id}", web::get().to(handlers::get_post))
            .route("/posts/{id}", web::delete().to(handlers::delete_post))
            .route("/posts/{id}/comments", web::post().to(handlers::add_comment))
            .route("/posts/{id}/like", web::post().to(handlers::toggle_like))
            .route("/contact", web::post().to(handlers::submit_contact)),
    );
}
