//! `toggle-like` tool

use crate::schema::{non_empty_string, object};
use crate::tool::parse_args;
use crate::{Result, Tool};
use async_trait::async_trait;
use serde_json::{Value, json};
use space_api::{LikeInput, SpaceApi};
use std::sync::Arc;

/// Likes or unlikes a post; the backend decides which
pub struct ToggleLikeTool {
    api: Arc<dyn SpaceApi>,
}

impl ToggleLikeTool {
    pub fn new(api: Arc<dyn SpaceApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for ToggleLikeTool {
    async fn execute(&self, params: Value) -> Result<String> {
        let input: LikeInput = parse_args(params)?;
        let response = self.api.toggle_like(input).await?;

        let verb = if response.liked { "liked" } else { "unliked" };
        Ok(format!("Post {verb} successfully"))
    }

    fn name(&self) -> &str {
        "toggle-like"
    }

    fn description(&self) -> &str {
        "Like or unlike a post"
    }

    fn input_schema(&self) -> Value {
        object(
            json!({
                "postId": non_empty_string("ID of the post to like/unlike"),
            }),
            vec!["postId"],
        )
    }

    fn failure_message(&self) -> &str {
        "Error toggling like"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use space_api::{LikeResponse, MockSpaceApi};

    async fn toggle_with(liked: bool) -> String {
        let mut api = MockSpaceApi::new();
        api.expect_toggle_like()
            .withf(|input| input.post_id == "p1")
            .times(1)
            .returning(move |_| Ok(LikeResponse { liked }));

        ToggleLikeTool::new(Arc::new(api))
            .execute(json!({"postId": "p1"}))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_message_follows_liked_flag() {
        assert_eq!(toggle_with(true).await, "Post liked successfully");
        assert_eq!(toggle_with(false).await, "Post unliked successfully");
    }
}
