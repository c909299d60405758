//! # ss-core
//!
//! The central domain model and interface definitions for Social Sphere.

pub mod document;
pub mod error;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use document::*;
pub use error::*;
pub use models::*;
pub use traits::*;
