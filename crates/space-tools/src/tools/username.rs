//! `update-username` tool

use super::MAX_USERNAME_LENGTH;
use crate::schema::{bounded_string, object};
use crate::tool::parse_args;
use crate::{Result, Tool};
use async_trait::async_trait;
use serde_json::{Value, json};
use space_api::{SpaceApi, UsernameInput};
use std::sync::Arc;

/// Changes the authenticated user's name
pub struct UpdateUsernameTool {
    api: Arc<dyn SpaceApi>,
}

impl UpdateUsernameTool {
    pub fn new(api: Arc<dyn SpaceApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for UpdateUsernameTool {
    async fn execute(&self, params: Value) -> Result<String> {
        let input: UsernameInput = parse_args(params)?;
        let response = self.api.update_username(input).await?;

        Ok(format!(
            "Username updated successfully to '{}'",
            response.name
        ))
    }

    fn name(&self) -> &str {
        "update-username"
    }

    fn description(&self) -> &str {
        "Update the authenticated user's username"
    }

    fn input_schema(&self) -> Value {
        object(
            json!({
                "username": bounded_string("New username", 1, MAX_USERNAME_LENGTH),
            }),
            vec!["username"],
        )
    }

    fn failure_message(&self) -> &str {
        "Error updating username"
    }
}
