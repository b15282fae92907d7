//! Tool-specific error types.
//!
//! A [`ToolError`] is either a protocol violation, reported through the
//! JSON-RPC error channel, or a domain failure, folded into a successful
//! reply flagged `isError`. [`ToolError::into_call_result`] is the only
//! place that decides which.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, ErrorCode},
};
use std::error::Error as StdError;
use thiserror::Error;
use tracing::warn;

/// Prefix of every domain-level failure message shown to callers.
pub const EXECUTION_FAILED_PREFIX: &str = "Error executing search";

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("{0}")]
    InvalidArguments(String),

    /// The upstream service answered with a non-2xx status.
    #[error("SearxNG API error: {}", upstream_message(.status, .status_text, .detail))]
    Upstream {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },

    /// The request never produced a usable response (connect failure, body
    /// read failure, malformed JSON on a 2xx reply, ...).
    #[error("{0}")]
    Transport(String),
}

fn upstream_message(status: &u16, status_text: &str, detail: &Option<String>) -> String {
    let mut message = status.to_string();
    if !status_text.is_empty() {
        message.push(' ');
        message.push_str(status_text);
    }
    if let Some(detail) = detail {
        message.push_str(" - ");
        message.push_str(detail);
    }
    message
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "transport" error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Whether this failure happened after a network attempt.
    pub fn is_domain_failure(&self) -> bool {
        matches!(self, Self::Upstream { .. } | Self::Transport(_))
    }

    /// Route the failure to its reply channel.
    pub fn into_call_result(self) -> Result<CallToolResult, McpError> {
        match self {
            Self::NotFound(_) => Err(McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                self.to_string(),
                None,
            )),
            Self::InvalidArguments(msg) => Err(McpError::invalid_params(msg, None)),
            failure @ (Self::Upstream { .. } | Self::Transport(_)) => {
                let message = format!("{}: {}", EXECUTION_FAILED_PREFIX, failure);
                warn!("{}", message);
                Ok(CallToolResult::error(vec![Content::text(message)]))
            }
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's Display leaves out the cause ("connection refused", ...).
        let mut message = err.to_string();
        let mut source = StdError::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Transport(message)
    }
}
