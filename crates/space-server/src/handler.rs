//! MCP request handler bridging the tool registry to rust-mcp-sdk

use async_trait::async_trait;
use rust_mcp_sdk::McpServer;
use rust_mcp_sdk::mcp_server::ServerHandler;
use rust_mcp_sdk::schema::schema_utils::CallToolError;
use rust_mcp_sdk::schema::{
    CallToolRequest, CallToolRequestParams, CallToolResult, ListToolsRequest, ListToolsResult, RpcError, TextContent,
    Tool as McpTool,
};
use serde_json::{Map, Value, json};
use space_tools::{Tool, ToolOutput, ToolRegistry};
use std::sync::Arc;
use tracing::warn;

/// Serves `tools/list` and `tools/call` from a [`ToolRegistry`]
pub struct SpaceServerHandler {
    registry: Arc<ToolRegistry>,

    /// Catalog in MCP form, built once since the registry never changes
    tools: Vec<McpTool>,
}

impl SpaceServerHandler {
    pub fn new(registry: Arc<ToolRegistry>) -> serde_json::Result<Self> {
        let tools = registry
            .list_tools()
            .iter()
            .map(|tool| to_mcp_tool(tool.as_ref()))
            .collect::<serde_json::Result<Vec<_>>>()?;

        Ok(Self { registry, tools })
    }

    pub fn tools(&self) -> &[McpTool] {
        &self.tools
    }

    /// Run a `tools/call` request against the registry
    ///
    /// Absent arguments are treated as an empty object. Only an unknown tool
    /// name is reported as a protocol error.
    pub async fn call(
        &self,
        params: CallToolRequestParams,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        let arguments = Value::Object(params.arguments.unwrap_or_else(Map::new));

        match self.registry.call(&params.name, arguments).await {
            Some(output) => Ok(to_call_tool_result(output)),
            None => {
                warn!(tool = %params.name, "Unknown tool requested");
                Err(CallToolError::unknown_tool(params.name))
            }
        }
    }
}

/// Describe a tool in MCP `tools/list` form
pub fn to_mcp_tool(tool: &dyn Tool) -> serde_json::Result<McpTool> {
    serde_json::from_value(json!({
        "name": tool.name(),
        "description": tool.description(),
        "inputSchema": tool.input_schema(),
    }))
}

/// Wrap a tool's text output as an MCP call result
pub fn to_call_tool_result(output: ToolOutput) -> CallToolResult {
    let mut result = CallToolResult::text_content(vec![TextContent::from(output.text)]);
    if output.is_error {
        result.is_error = Some(true);
    }
    result
}

#[async_trait]
impl ServerHandler for SpaceServerHandler {
    async fn handle_list_tools_request(
        &self,
        _request: ListToolsRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> std::result::Result<ListToolsResult, RpcError> {
        Ok(ListToolsResult {
            tools: self.tools.clone(),
            meta: None,
            next_cursor: None,
        })
    }

    async fn handle_call_tool_request(
        &self,
        request: CallToolRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        self.call(request.params).await
    }
}
