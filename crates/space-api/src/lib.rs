//! Client for the MCP Space social-posting backend
//!
//! Each operation performs exactly one HTTP round-trip and reports failures
//! through a single [`ApiError`] type whose message names the operation that
//! failed. The [`SpaceApi`] trait is the seam the tool layer is written
//! against; [`SpaceApiClient`] is the reqwest-backed implementation.

pub mod client;
pub mod error;
pub mod types;

pub use client::{SpaceApi, SpaceApiClient};
pub use error::{ApiError, Result};
pub use types::{
    Feed, LikeInput, LikeResponse, Post, PostInput, ReplyInput, UsernameInput, UsernameResponse,
};

#[cfg(feature = "mock")]
pub use client::MockSpaceApi;
