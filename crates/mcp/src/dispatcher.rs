//! Request dispatch.
//!
//! Routes a decoded request to introspection or to a registered tool and
//! builds the response envelope. Handler failures never escape: every
//! decoded request gets exactly one response carrying its id.

use crate::protocol::{
    JsonRpcRequest, JsonRpcResponse, ToolResult, INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use taskman_tools::{ToolError, ToolRegistry};
use tracing::debug;

/// Introspection method listing the registered tools.
pub const METHOD_LIST_TOOLS: &str = "mcp/list_tools";

/// Tool invocation method.
pub const METHOD_CALL_TOOL: &str = "mcp/call_tool";

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default = "empty_arguments")]
    arguments: Value,
}

fn empty_arguments() -> Value {
    json!({})
}

/// Routes requests to the tool registry.
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Handle one request, always producing a response with the same id.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            METHOD_LIST_TOOLS => {
                JsonRpcResponse::result(request.id, json!({ "tools": self.registry.list() }))
            }
            METHOD_CALL_TOOL => self.call_tool(request.id, request.params).await,
            _ => JsonRpcResponse::error(request.id, METHOD_NOT_FOUND, "Method not found"),
        }
    }

    async fn call_tool(&self, id: String, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value).transpose() {
            Ok(Some(params)) => params,
            Ok(None) => return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params"),
            Err(e) => return JsonRpcResponse::error(id, INVALID_PARAMS, e.to_string()),
        };

        let Some(tool) = self.registry.find(&params.name) else {
            return JsonRpcResponse::error(id, INVALID_PARAMS, "Unknown tool");
        };

        debug!("Tool call: {} with args: {:?}", params.name, params.arguments);

        match tool.call(params.arguments).await {
            Ok(output) => {
                let text = serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string());
                let result = serde_json::to_value(ToolResult::text(text))
                    .unwrap_or_else(|_| json!({ "content": [] }));
                JsonRpcResponse::result(id, result)
            }
            Err(ToolError::InvalidArgument(message)) | Err(ToolError::NotFound(message)) => {
                JsonRpcResponse::error(id, INVALID_PARAMS, message)
            }
            Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, format!("Internal error: {}", e)),
        }
    }
}
