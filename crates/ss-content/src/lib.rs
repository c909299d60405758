//! # ss-content
//!
//! The Social Content Repository: the permitted operations against the
//! document store, with input validation and error classification at the
//! boundary. Each operation is a self-contained transaction; no operation
//! depends on another's in-memory state.

pub mod contact;
pub mod filter;
pub mod posts;

pub use contact::ContactDesk;
pub use filter::{filter_posts, matches_filters};
pub use posts::ContentRepository;
