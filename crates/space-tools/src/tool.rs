//! Tool trait definition

use crate::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A named action an agent host can call
///
/// The registry checks arguments against [`input_schema`](Tool::input_schema)
/// before [`execute`](Tool::execute) runs, so implementations only deal with
/// well-formed input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool and render its outcome as text
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as a JSON object matching `input_schema`
    async fn execute(&self, params: Value) -> Result<String>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    fn input_schema(&self) -> Value;

    /// Prefix for error results, e.g. "Error creating post"
    fn failure_message(&self) -> &str;
}

/// Deserialize validated arguments into a typed struct
pub(crate) fn parse_args<T: DeserializeOwned>(params: Value) -> Result<T> {
    serde_json::from_value(params).map_err(|e| crate::ToolError::Validation(e.to_string()))
}
