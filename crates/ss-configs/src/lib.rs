//! # ss-configs
//!
//! Layered runtime configuration: built-in defaults, then an optional
//! `social-sphere.toml` next to the binary, then `SS__`-prefixed environment
//! variables (e.g. `SS__SERVER__PORT=9000`). A `.env` file is honoured
//! before the environment is read.

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which `DocumentStore` plugin the binary should assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Only consulted by backends that need a location, e.g. sqlite.
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let cfg = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("store.backend", "memory")?
            .set_default("store.database_url", "sqlite:social_sphere.db")?
            .add_source(File::with_name("social-sphere").required(false))
            .add_source(Environment::with_prefix("SS").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }
}
