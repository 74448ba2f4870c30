//! JSON-RPC 2.0 envelope types and line codec.
//!
//! One request and one response per line of UTF-8 text. Unknown envelope
//! fields are ignored on decode for forward compatibility; a line missing
//! `method` or `id` is a parse error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC version tag carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Unknown top-level method.
pub const METHOD_NOT_FOUND: i32 = -32601;

/// Invalid or missing method/tool arguments, including unknown tools.
pub const INVALID_PARAMS: i32 = -32602;

/// Handler or storage failure surfaced at the protocol boundary.
pub const INTERNAL_ERROR: i32 = -32000;

/// A decoded JSON-RPC request.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    /// Version tag
    #[serde(default = "default_version")]
    pub jsonrpc: String,

    /// Correlation token, echoed verbatim in the response
    pub id: String,

    /// Method name
    pub method: String,

    /// Method-specific parameters
    #[serde(default)]
    pub params: Option<Value>,
}

fn default_version() -> String {
    JSONRPC_VERSION.to_string()
}

/// A JSON-RPC response envelope. Carries exactly one of `result` or
/// `error`; the absent member is omitted from the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Version tag
    pub jsonrpc: String,

    /// Correlation token copied from the request
    pub id: String,

    /// Successful payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Failure payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// Error member of a response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Machine-readable error code
    pub code: i32,

    /// Human-readable message
    pub message: String,
}

impl JsonRpcResponse {
    /// Build a success envelope.
    pub fn result(id: impl Into<String>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            result: Some(result),
            error: None,
        }
    }

    /// Build an error envelope.
    pub fn error(id: impl Into<String>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Uniform wrapper for successful tool output: a sequence of typed content
/// parts, so future tool types can be added without changing the response
/// shape. Currently always a single text part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Content parts
    pub content: Vec<ContentPart>,
}

/// One typed part of a tool result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPart {
    /// Part type discriminator
    #[serde(rename = "type")]
    pub part_type: String,

    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ToolResult {
    /// Wrap a single text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentPart {
                part_type: "text".to_string(),
                text: Some(text.into()),
            }],
        }
    }
}

/// Decode one line into a request.
pub fn decode(line: &str) -> Result<JsonRpcRequest, serde_json::Error> {
    serde_json::from_str(line)
}

/// Encode a response as exactly one line, without the trailing delimiter.
pub fn encode(response: &JsonRpcResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}
