//! SearXNG MCP Server Library
//!
//! This crate exposes a self-hosted SearXNG metasearch instance as a single
//! MCP tool, `search`.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and
//!   the transports (stdio, TCP, HTTP)
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the tool registry and the SearXNG search tool
//!
//! # Example
//!
//! ```rust,no_run
//! use searxng_mcp_server::core::{Config, McpServer, SearxngConfig, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let searxng = SearxngConfig::parse("http://localhost:8888")?;
//!     let config = Config::from_env(searxng);
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::new(config)?;
//!     transport.run(server, async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
