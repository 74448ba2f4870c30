//! Tool integration.
//!
//! Named, schema-described operations invokable through the MCP server.

#![warn(missing_docs)]

pub mod builtin;
pub mod registry;
pub mod r#trait;

pub use builtin::{AddTaskTool, GithubUserTool, ListTasksTool, MarkCompletedTool};
pub use registry::{RegistryError, ToolInfo, ToolRegistry};
pub use r#trait::{parse_args, Tool, ToolError};
