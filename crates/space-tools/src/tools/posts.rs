//! Post creation tools: `create-post` and `reply-to-post`

use super::MAX_CONTENT_LENGTH;
use crate::schema::{bounded_string, non_empty_string, object, url_string};
use crate::tool::parse_args;
use crate::{Result, Tool, ToolError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use space_api::{PostInput, ReplyInput, SpaceApi};
use std::sync::Arc;

fn content_schema(description: &str) -> Value {
    bounded_string(description, 1, MAX_CONTENT_LENGTH)
}

fn render(post: &Map<String, Value>) -> Result<String> {
    Ok(serde_json::to_string_pretty(post)?)
}

// With image URLs disabled the property is dropped from the schema, so a
// supplied value is refused here instead of being silently ignored.
fn check_image_url(allow_image_url: bool, image_url: Option<&String>) -> Result<()> {
    if !allow_image_url && image_url.is_some() {
        return Err(ToolError::Validation(
            "imageUrl is not supported by this server".to_string(),
        ));
    }
    Ok(())
}

/// Creates a new post
pub struct CreatePostTool {
    api: Arc<dyn SpaceApi>,
    allow_image_url: bool,
}

impl CreatePostTool {
    pub fn new(api: Arc<dyn SpaceApi>, allow_image_url: bool) -> Self {
        Self {
            api,
            allow_image_url,
        }
    }
}

#[async_trait]
impl Tool for CreatePostTool {
    async fn execute(&self, params: Value) -> Result<String> {
        let input: PostInput = parse_args(params)?;
        check_image_url(self.allow_image_url, input.image_url.as_ref())?;

        let post = self.api.create_post(input).await?;
        render(&post)
    }

    fn name(&self) -> &str {
        "create-post"
    }

    fn description(&self) -> &str {
        "Create a new post with the provided content"
    }

    fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        properties.insert(
            "content".to_string(),
            content_schema("Content of the post (1-280 characters)"),
        );
        if self.allow_image_url {
            properties.insert(
                "imageUrl".to_string(),
                url_string("Optional URL to an image to attach to the post"),
            );
        }

        object(Value::Object(properties), vec!["content"])
    }

    fn failure_message(&self) -> &str {
        "Error creating post"
    }
}

/// Replies to an existing post
pub struct ReplyToPostTool {
    api: Arc<dyn SpaceApi>,
    allow_image_url: bool,
}

impl ReplyToPostTool {
    pub fn new(api: Arc<dyn SpaceApi>, allow_image_url: bool) -> Self {
        Self {
            api,
            allow_image_url,
        }
    }
}

#[async_trait]
impl Tool for ReplyToPostTool {
    async fn execute(&self, params: Value) -> Result<String> {
        let input: ReplyInput = parse_args(params)?;
        check_image_url(self.allow_image_url, input.image_url.as_ref())?;

        let reply = self.api.reply_to_post(input).await?;
        render(&reply)
    }

    fn name(&self) -> &str {
        "reply-to-post"
    }

    fn description(&self) -> &str {
        "Create a reply to an existing post"
    }

    fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        properties.insert(
            "content".to_string(),
            content_schema("Content of the reply (1-280 characters)"),
        );
        properties.insert(
            "parentId".to_string(),
            non_empty_string("ID of the post being replied to"),
        );
        if self.allow_image_url {
            properties.insert(
                "imageUrl".to_string(),
                url_string("Optional URL to an image to attach to the reply"),
            );
        }

        object(Value::Object(properties), vec!["content", "parentId"])
    }

    fn failure_message(&self) -> &str {
        "Error creating reply"
    }
}
