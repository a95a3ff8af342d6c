//! Shared utilities for mcp-space
//!
//! This crate provides the ambient pieces every other crate in the workspace
//! leans on: logging setup and the process-wide configuration that is read
//! once at startup.

pub mod config;
pub mod logging;

pub use config::{ConfigDiagnostic, ConfigError, DiagnosticSeverity, SpaceConfig};
pub use logging::{init_tracing, init_tracing_with_level};
