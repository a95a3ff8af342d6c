//! `get-feed` tool

use crate::schema::empty_object;
use crate::{Result, Tool};
use async_trait::async_trait;
use serde_json::Value;
use space_api::SpaceApi;
use std::sync::Arc;

/// Fetches the recent-posts feed
///
/// The feed is rendered exactly as the backend returned it; the backend
/// owns ordering and the 50-post bound.
pub struct GetFeedTool {
    api: Arc<dyn SpaceApi>,
}

impl GetFeedTool {
    pub fn new(api: Arc<dyn SpaceApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for GetFeedTool {
    async fn execute(&self, _params: Value) -> Result<String> {
        let feed = self.api.get_feed().await?;
        Ok(serde_json::to_string_pretty(&feed)?)
    }

    fn name(&self) -> &str {
        "get-feed"
    }

    fn description(&self) -> &str {
        "Get recent posts feed (50 most recent posts in reverse chronological order) along with the current topic"
    }

    fn input_schema(&self) -> Value {
        empty_object()
    }

    fn failure_message(&self) -> &str {
        "Error fetching feed"
    }
}
