//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool registry.
//!
//! `list_tools` and `call_tool` are implemented by hand rather than through
//! an rmcp `ToolRouter`, so that an unknown tool name is reported as
//! "method not found". The same registry backs the HTTP transport.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::ToolRegistry;

/// Instructions sent to clients in the `initialize` reply.
pub const INSTRUCTIONS: &str = "Use the 'search' tool to query a SearXNG metasearch instance. \
     Results are returned as JSON by default; pass 'format' to get csv, rss or html instead.";

/// The main MCP server handler.
///
/// Cheap to clone; every clone shares the same configuration and tools.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tools offered by this server.
    tools: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let tools = ToolRegistry::new(&config)?;
        Ok(Self::with_registry(config, tools))
    }

    /// Create a server around an existing registry.
    pub fn with_registry(config: Config, tools: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            tools: Arc::new(tools),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        tokio::select! {
            result = self.tools.call_tool(&request.name, request.arguments) => result,
            () = context.ct.cancelled() => {
                info!("Tool call '{}' cancelled", request.name);
                Err(McpError::internal_error("Request cancelled", None))
            }
        }
    }
}
