//! Common wire types used throughout the APBook client
//!
//! The backend speaks camelCase JSON; every record type here carries the
//! serde renames so callers work with idiomatic Rust field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Feed / Post Types
// ============================================================================

/// Kind of an attached media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A reference to an uploaded media item attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    /// Public URL of the media item
    pub url: String,
    /// Whether the item is an image or a video
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// An interest tag label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// A single post as it appears in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    /// Post identifier
    pub post_id: String,
    /// Author identifier
    pub user_id: String,
    /// Author display name
    pub username: String,
    /// Author avatar URL
    #[serde(default)]
    pub user_avatar: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Text content
    pub content: String,
    /// Attached media, in display order
    #[serde(default)]
    pub media: Vec<MediaRef>,
    /// Number of likes
    #[serde(default)]
    pub like_count: u64,
    /// Number of comments
    #[serde(default)]
    pub comment_count: u64,
    /// Interest tags on the post
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// One page of the feed: an ordered run of posts plus the continuation
/// cursor. `next_cursor: None` signals there are no further pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub posts: Vec<PostSummary>,
    pub next_cursor: Option<String>,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
