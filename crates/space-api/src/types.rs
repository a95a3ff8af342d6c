//! Request and response types for the backend API
//!
//! Response bodies are kept opaque apart from the one field each tool needs
//! to phrase its confirmation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A post as returned by the backend, forwarded untouched
pub type Post = Map<String, Value>;

/// The recent-posts feed, in the order the backend returned it
pub type Feed = Vec<Value>;

/// Body of `POST /posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of `POST /posts/reply`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyInput {
    pub content: String,
    pub parent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of `POST /posts/like`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeInput {
    pub post_id: String,
}

/// Body of the username update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameInput {
    pub username: String,
}

/// Outcome of a like toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
}

/// Outcome of a username update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameResponse {
    pub name: String,
}
