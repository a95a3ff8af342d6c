//! Server assembly and the stdio run loop

use crate::handler::SpaceServerHandler;
use rust_mcp_sdk::mcp_server::server_runtime;
use rust_mcp_sdk::schema::{InitializeResult, LATEST_PROTOCOL_VERSION};
use rust_mcp_sdk::{McpServer, StdioTransport, TransportOptions};
use serde_json::json;
use space_api::{SpaceApi, SpaceApiClient};
use space_tools::{ToolCatalogOptions, ToolRegistry};
use space_utils::SpaceConfig;
use std::sync::Arc;
use tracing::info;

/// Name reported to hosts during `initialize`
pub const SERVER_NAME: &str = "mymcpspace";

/// Server identity and capabilities sent in the `initialize` response
pub fn server_details() -> serde_json::Result<InitializeResult> {
    serde_json::from_value(json!({
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": {},
        },
        "protocolVersion": LATEST_PROTOCOL_VERSION,
    }))
}

/// Build the tool catalog backed by the HTTP client
pub fn build_registry(config: &SpaceConfig) -> ToolRegistry {
    let api: Arc<dyn SpaceApi> = Arc::new(SpaceApiClient::from_config(config));
    ToolRegistry::with_default_tools(api, ToolCatalogOptions::from(config))
}

/// Serve the registry over stdin/stdout until the host disconnects
pub async fn run_stdio(registry: ToolRegistry) -> anyhow::Result<()> {
    let details = server_details()?;
    let handler = SpaceServerHandler::new(Arc::new(registry))?;
    let tool_count = handler.tools().len();

    let transport = StdioTransport::new(TransportOptions::default())
        .map_err(|e| anyhow::anyhow!("Failed to open stdio transport: {e}"))?;
    let server = server_runtime::create_server(details, transport, handler);

    info!("MCP Space server running on stdio with {tool_count} tools");
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("MCP server error: {e}"))
}
