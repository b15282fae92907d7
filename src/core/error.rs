//! Error types and handling for the MCP server.
//!
//! This module defines the startup error type. Per-call failures live in
//! [`crate::domains::tools::ToolError`] and transport failures in
//! [`crate::core::transport::TransportError`].

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors (fatal at startup).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
