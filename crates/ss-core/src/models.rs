//! # Domain Models
//!
//! These structs represent the core entities of Social Sphere.
//! Document identifiers are UUID v7 (time-ordered, assigned by the store);
//! comment identifiers are UUID v4, generated at append time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A community submission.
///
/// Immutable after creation except for its `likes` set and `comments`
/// sequence; `author_id` never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Assigned by the store on creation; absent from the persisted body.
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    pub content: String,
    /// Free-form label; the fixed enumeration is enforced at the UI layer only.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub author_id: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set of user identifiers, stored as an array with unique members.
    #[serde(default)]
    pub likes: Vec<String>,
    /// Append-only from the client's perspective.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|u| u == user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// A reply attached to exactly one Post, embedded in its comment sequence.
/// Never edited or individually deleted; removal of the Post removes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    /// Client-assigned at append time, unlike the store-assigned post stamps.
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied input for [`Post`] creation.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub author_id: String,
    pub author_name: String,
    pub content: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub skills: Vec<String>,
    pub image_url: Option<String>,
}

/// Caller-supplied input for a comment append.
#[derive(Debug, Clone, Default)]
pub struct CommentDraft {
    pub content: String,
    pub author_id: String,
    pub author_name: String,
}

/// An out-of-band support submission. Written once, never read back here.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The fixed category enumeration offered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Idea,
    Project,
    Skill,
    Resource,
    Question,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Idea => "Idea",
            Category::Project => "Project",
            Category::Skill => "Skill",
            Category::Resource => "Resource",
            Category::Question => "Question",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Idea" => Ok(Category::Idea),
            "Project" => Ok(Category::Project),
            "Skill" => Ok(Category::Skill),
            "Resource" => Ok(Category::Resource),
            "Question" => Ok(Category::Question),
            _ => Err(()),
        }
    }
}

/// Category selection for the post list filter. `all` passes every post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => post.category.as_deref() == Some(c.as_str()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Category::from_str(s).map(CategoryFilter::Only)
        }
    }
}
