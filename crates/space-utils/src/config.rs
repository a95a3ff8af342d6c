//! Configuration management for the mcp-space server
//!
//! Settings are read once at process start from the environment (optionally
//! seeded from a `.env` file) and never reloaded.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Default backend base URL
pub const DEFAULT_API_BASE_URL: &str = "https://mcp-space.vercel.app/api";

/// Environment variable holding the backend base URL
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
/// Environment variable holding the bearer token
pub const API_TOKEN_VAR: &str = "API_TOKEN";
/// Environment variable toggling the optional `imageUrl` tool argument
pub const IMAGE_URLS_VAR: &str = "MCP_SPACE_IMAGE_URLS";
/// Environment variable toggling the `update-username` tool
pub const UPDATE_USERNAME_VAR: &str = "MCP_SPACE_UPDATE_USERNAME";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A boolean setting could not be parsed
    #[error("Invalid boolean for {key}: '{value}'")]
    InvalidBool { key: String, value: String },

    /// Startup validation produced at least one fatal diagnostic
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Severity of a startup diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Error,
}

/// A single finding from [`SpaceConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDiagnostic {
    pub severity: DiagnosticSeverity,
    /// Setting the finding refers to
    pub key: String,
    pub message: String,
}

impl ConfigDiagnostic {
    fn warning(key: &str, message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            key: key.to_string(),
            message: message.into(),
        }
    }

    fn error(key: &str, message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Process-wide configuration
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpaceConfig {
    /// Backend REST base URL
    pub api_base_url: String,

    /// Static bearer token, empty when unset
    pub api_token: String,

    /// Expose the optional `imageUrl` argument on post and reply tools
    pub allow_image_url: bool,

    /// Register the `update-username` tool
    pub enable_update_username: bool,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: String::new(),
            allow_image_url: true,
            enable_update_username: true,
        }
    }
}

// Keeps the token out of logs.
impl fmt::Debug for SpaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpaceConfig")
            .field("api_base_url", &self.api_base_url)
            .field("api_token", &if self.api_token.is_empty() { "<unset>" } else { "<redacted>" })
            .field("allow_image_url", &self.allow_image_url)
            .field("enable_update_username", &self.enable_update_username)
            .finish()
    }
}

impl SpaceConfig {
    /// Load `.env` from the working directory if present
    ///
    /// A missing file is not an error; values already present in the
    /// environment win over the file.
    pub fn load_dotenv() {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup(API_BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_base_url);

        let api_token = lookup(API_TOKEN_VAR).unwrap_or_default();

        let allow_image_url = match lookup(IMAGE_URLS_VAR) {
            Some(v) => parse_bool(IMAGE_URLS_VAR, &v)?,
            None => defaults.allow_image_url,
        };

        let enable_update_username = match lookup(UPDATE_USERNAME_VAR) {
            Some(v) => parse_bool(UPDATE_USERNAME_VAR, &v)?,
            None => defaults.enable_update_username,
        };

        Ok(Self {
            api_base_url,
            api_token,
            allow_image_url,
            enable_update_username,
        })
    }

    /// Whether a bearer token was supplied
    pub fn has_token(&self) -> bool {
        !self.api_token.trim().is_empty()
    }

    /// Check the configuration and report every finding
    ///
    /// A missing token is only a warning: requests still go out and the
    /// backend answers 401. Callers decide whether warnings are fatal.
    pub fn validate(&self) -> Vec<ConfigDiagnostic> {
        let mut diagnostics = Vec::new();

        if !self.has_token() {
            diagnostics.push(ConfigDiagnostic::warning(
                API_TOKEN_VAR,
                "API_TOKEN is not set; requests will be rejected as unauthorized",
            ));
        }

        match Url::parse(&self.api_base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => diagnostics.push(ConfigDiagnostic::error(
                API_BASE_URL_VAR,
                format!("unsupported URL scheme '{}'", url.scheme()),
            )),
            Err(e) => diagnostics.push(ConfigDiagnostic::error(
                API_BASE_URL_VAR,
                format!("'{}' is not a valid URL: {e}", self.api_base_url),
            )),
        }

        diagnostics
    }

    /// Run [`validate`](Self::validate) and turn fatal findings into an error
    ///
    /// With `require_token` a missing token is fatal too. Returns the
    /// non-fatal diagnostics so the caller can log them.
    pub fn check(&self, require_token: bool) -> Result<Vec<ConfigDiagnostic>, ConfigError> {
        let (fatal, rest): (Vec<_>, Vec<_>) = self
            .validate()
            .into_iter()
            .partition(|d| d.is_error() || (require_token && d.key == API_TOKEN_VAR));

        if fatal.is_empty() {
            Ok(rest)
        } else {
            let messages: Vec<String> = fatal.iter().map(ToString::to_string).collect();
            Err(ConfigError::Invalid(messages.join("; ")))
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
