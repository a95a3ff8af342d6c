//! MCP stdio server for the MCP Space social-posting tools
//!
//! Wires [`space_api::SpaceApiClient`] into a [`space_tools::ToolRegistry`]
//! and serves it over the Model Context Protocol on stdin/stdout.

pub mod handler;
pub mod server;

pub use handler::SpaceServerHandler;
pub use server::{SERVER_NAME, build_registry, run_stdio, server_details};
