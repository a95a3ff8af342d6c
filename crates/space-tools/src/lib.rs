//! Tool catalog for mcp-space
//!
//! Each tool declares a name, a description and a JSON input schema. The
//! [`ToolRegistry`] validates agent-supplied arguments against that schema
//! before a tool runs, and turns every outcome (including failures) into a
//! [`ToolOutput`] so nothing escapes the tool boundary as a fault.

pub mod error;
pub mod output;
pub mod registry;
pub mod schema;
pub mod tool;
pub mod tools;

pub use error::{Result, ToolError};
pub use output::ToolOutput;
pub use registry::{ToolCatalogOptions, ToolRegistry};
pub use tool::Tool;
