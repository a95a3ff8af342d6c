//! The social-posting tools

mod feed;
mod like;
mod posts;
mod username;

pub use feed::GetFeedTool;
pub use like::ToggleLikeTool;
pub use posts::{CreatePostTool, ReplyToPostTool};
pub use username::UpdateUsernameTool;

/// Content limit for posts and replies
pub const MAX_CONTENT_LENGTH: usize = 280;

/// Username limit
pub const MAX_USERNAME_LENGTH: usize = 255;
