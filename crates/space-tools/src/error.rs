//! Error types for tool execution

use space_api::ApiError;
use thiserror::Error;

/// Result type alias for tool execution
pub type Result<T> = std::result::Result<T, ToolError>;

/// Errors a tool can fail with
#[derive(Error, Debug)]
pub enum ToolError {
    /// Arguments did not satisfy the tool's input schema
    #[error("Invalid arguments: {0}")]
    Validation(String),

    /// The backend call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response could not be rendered as text
    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
