//! Tool registry for managing and dispatching tools

use crate::output::ToolOutput;
use crate::schema;
use crate::tools::{CreatePostTool, GetFeedTool, ReplyToPostTool, ToggleLikeTool, UpdateUsernameTool};
use crate::{Tool, ToolError};
use serde_json::Value;
use space_api::SpaceApi;
use space_utils::SpaceConfig;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// Which optional parts of the catalog are exposed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCatalogOptions {
    /// Offer the optional `imageUrl` argument on post and reply tools
    pub allow_image_url: bool,
    /// Register the `update-username` tool
    pub enable_update_username: bool,
}

impl Default for ToolCatalogOptions {
    fn default() -> Self {
        Self {
            allow_image_url: true,
            enable_update_username: true,
        }
    }
}

impl From<&SpaceConfig> for ToolCatalogOptions {
    fn from(config: &SpaceConfig) -> Self {
        Self {
            allow_image_url: config.allow_image_url,
            enable_update_username: config.enable_update_username,
        }
    }
}

/// Registry for managing tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the social-posting catalog on top of `api`
    pub fn with_default_tools(api: Arc<dyn SpaceApi>, options: ToolCatalogOptions) -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(CreatePostTool::new(
            Arc::clone(&api),
            options.allow_image_url,
        )));
        registry.register(Arc::new(ReplyToPostTool::new(
            Arc::clone(&api),
            options.allow_image_url,
        )));
        registry.register(Arc::new(ToggleLikeTool::new(Arc::clone(&api))));
        registry.register(Arc::new(GetFeedTool::new(Arc::clone(&api))));
        if options.enable_update_username {
            registry.register(Arc::new(UpdateUsernameTool::new(api)));
        }

        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all registered tools, sorted by name
    pub fn list_tools(&self) -> Vec<Arc<dyn Tool>> {
        let mut tools: Vec<_> = self.tools.values().cloned().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Validate arguments and run the named tool
    ///
    /// Returns `None` only when no tool has that name. Every other outcome,
    /// including invalid arguments and backend failures, comes back as a
    /// [`ToolOutput`], flagged as an error where appropriate.
    pub async fn call(&self, name: &str, arguments: Value) -> Option<ToolOutput> {
        let tool = self.get(name)?;
        debug!(tool = name, "Calling tool");

        let result = match schema::validate(&arguments, &tool.input_schema()) {
            Ok(()) => tool.execute(arguments).await,
            Err(message) => Err(ToolError::Validation(message)),
        };

        Some(match result {
            Ok(text) => ToolOutput::success(text),
            Err(e) => {
                let message = format!("{}: {e}", tool.failure_message());
                error!(tool = name, "{message}");
                ToolOutput::error(message)
            }
        })
    }
}
