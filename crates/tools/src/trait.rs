//! Tool abstraction.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use taskman_storage::StorageError;

/// A tool that can be invoked over MCP.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get tool name.
    fn name(&self) -> &str;

    /// Get tool description.
    fn description(&self) -> &str;

    /// Get the JSON object describing accepted arguments.
    fn input_schema(&self) -> Value;

    /// Execute the tool against the given argument map.
    async fn call(&self, arguments: Value) -> Result<Value, ToolError>;
}

/// Errors surfaced by tool execution.
///
/// Expected conditions (bad arguments, unknown ids) get their own variants
/// so the dispatcher can answer them as invalid-params responses; anything
/// else becomes an internal error at the protocol boundary.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// A required argument is missing or has the wrong shape.
    #[error("{0}")]
    InvalidArgument(String),

    /// No entity matches the supplied identifier.
    #[error("{0}")]
    NotFound(String),

    /// The task store failed underneath the tool.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Upstream HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Any other tool failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Deserialize a tool's argument map into its typed form.
///
/// Serde's message names the offending field (`missing field `title``), so
/// the dispatcher can answer with a uniform invalid-params error.
pub fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArgument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Args {
        title: String,
    }

    #[test]
    fn test_parse_args_names_missing_field() {
        let err = parse_args::<Args>(serde_json::json!({})).unwrap_err();
        match err {
            ToolError::InvalidArgument(message) => assert!(message.contains("title")),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_args_accepts_extra_fields() {
        let args: Args =
            parse_args(serde_json::json!({"title": "t", "unknown": 1})).unwrap();
        assert_eq!(args.title, "t");
    }
}
