//! Tool registry - name-keyed lookup with stable listing order.

use super::r#trait::Tool;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Error raised when the registry is misconfigured.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two tools were registered under the same name.
    #[error("duplicate tool name: {0}")]
    DuplicateName(String),
}

/// Descriptor exposed through the `mcp/list_tools` introspection method.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    /// Tool name
    pub name: String,

    /// Tool description
    pub description: String,

    /// Input schema for the tool
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Registry mapping tool names to implementations.
///
/// Listing preserves registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool under its name. Registering the same name twice is a
    /// configuration error and fails fast at startup.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        let name = tool.name().to_string();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        debug!("Registered tool: {}", name);
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn find(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Describe all registered tools in registration order.
    pub fn list(&self) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#trait::ToolError;
    use async_trait::async_trait;
    use serde_json::json;

    struct NamedTool(&'static str);

    #[async_trait]
    impl Tool for NamedTool {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "a test tool"
        }

        fn input_schema(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn call(&self, _arguments: Value) -> Result<Value, ToolError> {
            Ok(json!({"ok": true}))
        }
    }

    #[test]
    fn test_register_and_find() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("alpha"))).unwrap();

        assert!(registry.find("alpha").is_some());
        assert!(registry.find("beta").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_name_fails_fast() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("alpha"))).unwrap();

        match registry.register(Arc::new(NamedTool("alpha"))) {
            Err(RegistryError::DuplicateName(name)) => assert_eq!(name, "alpha"),
            Ok(()) => panic!("duplicate registration must fail"),
        }
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("charlie"))).unwrap();
        registry.register(Arc::new(NamedTool("alpha"))).unwrap();
        registry.register(Arc::new(NamedTool("bravo"))).unwrap();

        let names: Vec<_> = registry.list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["charlie", "alpha", "bravo"]);
    }

    #[test]
    fn test_tool_info_serializes_input_schema_key() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("alpha"))).unwrap();

        let json = serde_json::to_value(registry.list()).unwrap();
        assert!(json[0].get("inputSchema").is_some());
        assert!(json[0].get("input_schema").is_none());
    }
}
