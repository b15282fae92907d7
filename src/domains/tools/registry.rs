//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-based dispatch used by every transport
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{info, instrument, warn};

use super::definitions::SearchTool;
use super::{ToolError, ToolHandler};
use crate::core::Result;
use crate::core::config::Config;

/// Tool registry - manages all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create the registry with every tool the server offers.
    pub fn new(config: &Config) -> Result<Self> {
        let search = SearchTool::new(&config.searxng)?;
        Ok(Self::with_tools(vec![Arc::new(search)]))
    }

    /// Create a registry from an explicit set of tools.
    pub fn with_tools(tools: Vec<Arc<dyn ToolHandler>>) -> Self {
        Self { tools }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.descriptor()).collect()
    }

    fn find(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Dispatch a tool call.
    ///
    /// An unknown name or invalid arguments come back as `Err` (JSON-RPC
    /// error); anything that failed after reaching the network comes back
    /// as `Ok` with `is_error` set.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let Some(tool) = self.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return ToolError::not_found(name).into_call_result();
        };

        match tool.call(arguments).await {
            Ok(result) => {
                info!("Tool '{}' completed", name);
                Ok(result)
            }
            Err(e) => {
                if !e.is_domain_failure() {
                    warn!("Rejected call to '{}': {}", name, e);
                }
                e.into_call_result()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SearxngConfig;
    use rmcp::model::ErrorCode;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn registry_for(uri: &str) -> ToolRegistry {
        let config = Config::new(SearxngConfig::parse(uri).unwrap());
        ToolRegistry::new(&config).unwrap()
    }

    async fn mock_upstream() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results":[]}"#))
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = registry_for("http://localhost:8888");
        assert_eq!(registry.tool_names(), vec!["search"]);
    }

    #[test]
    fn test_registry_lists_descriptors() {
        let registry = registry_for("http://localhost:8888");
        let tools = registry.list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, SearchTool::NAME);
    }

    #[tokio::test]
    async fn test_registry_call_search() {
        let server = mock_upstream().await;
        let registry = registry_for(&server.uri());

        let result = registry
            .call_tool("search", json!({"q": "rust"}).as_object().cloned())
            .await
            .unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_registry_call_unknown_makes_no_request() {
        let server = mock_upstream().await;
        let registry = registry_for(&server.uri());

        let err = registry
            .call_tool("lookup", json!({"q": "rust"}).as_object().cloned())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
        assert!(err.message.contains("lookup"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_registry_call_without_query_makes_no_request() {
        let server = mock_upstream().await;
        let registry = registry_for(&server.uri());

        let err = registry
            .call_tool("search", json!({}).as_object().cloned())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

        let err = registry.call_tool("search", None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_registry_upstream_failure_is_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;
        let registry = registry_for(&server.uri());

        let result = registry
            .call_tool("search", json!({"q": "x"}).as_object().cloned())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
