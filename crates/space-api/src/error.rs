//! Error types for backend API calls

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors raised by the API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend answered 401
    #[error("Unauthorized: Please check your API token")]
    Unauthorized,

    /// Backend answered 404
    #[error("Resource not found")]
    NotFound,

    /// Backend answered 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other non-success status
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Success body did not have the expected shape
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failure of a named operation
    #[error("{context}: {source}")]
    Operation {
        context: &'static str,
        source: Box<ApiError>,
    },
}

/// Error envelope returned by the backend on failure
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

impl ApiError {
    /// Wrap this error with the description of the operation that failed
    pub fn context(self, context: &'static str) -> Self {
        Self::Operation {
            context,
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping operation wrappers
    pub fn root(&self) -> &ApiError {
        match self {
            Self::Operation { source, .. } => source.root(),
            other => other,
        }
    }

    /// Map a non-success response to an error
    ///
    /// The detail text comes from the `error` field of a JSON body when there
    /// is one, and from the status reason phrase otherwise.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let fallback = status.canonical_reason().unwrap_or("Unknown error");
        let detail = serde_json::from_slice::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::BAD_REQUEST => Self::BadRequest(detail),
            _ => Self::Api {
                status: status.as_u16(),
                detail,
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.root(), Self::Unauthorized)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Self::NotFound)
    }
}
