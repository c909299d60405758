//! # Social Sphere Binary
//!
//! The entry point that assembles the application from the configured
//! store plugin and the API layer.

use actix_web::{web, App, HttpServer};
use ss_api::handlers::AppState;
use ss_configs::{AppConfig, StoreBackend};
use ss_content::{ContactDesk, ContentRepository};
use ss_core::DocumentStore;
use std::sync::Arc;

#[cfg(feature = "store-memory")]
use ss_store_memory::MemoryDocumentStore;

#[cfg(feature = "store-sqlite")]
use ss_store_sqlite::SqliteDocumentStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Configuration first: it loads .env, so RUST_LOG from there is seen.
    let cfg = AppConfig::load()?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // 2. Store plugin selection
    let store: Arc<dyn DocumentStore> = match cfg.store.backend {
        #[cfg(feature = "store-memory")]
        StoreBackend::Memory => Arc::new(MemoryDocumentStore::new()),
        #[cfg(feature = "store-sqlite")]
        StoreBackend::Sqlite => {
            Arc::new(SqliteDocumentStore::connect(&cfg.store.database_url).await?)
        }
        #[allow(unreachable_patterns)]
        other => anyhow::bail!("store backend {other:?} is not compiled into this binary"),
    };

    // 3. Facades share one injected store handle
    let state = web::Data::new(AppState {
        content: ContentRepository::new(store.clone()),
        contact: ContactDesk::new(store),
    });

    log::info!(
        "🚀 Social Sphere starting on http://{}:{}",
        cfg.server.host,
        cfg.server.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(ss_api::middleware::cors_policy())
            .wrap(ss_api::middleware::standard_middleware())
            .configure(ss_api::configure_routes)
    })
    .bind((cfg.server.host.as_str(), cfg.server.port))?
    .run()
    .await?;

    Ok(())
}
