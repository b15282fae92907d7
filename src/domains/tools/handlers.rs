//! Tool handler trait.
//!
//! Every tool the registry can dispatch to implements [`ToolHandler`]. The
//! trait keeps argument decoding and execution behind one async call so the
//! registry never needs to know a tool's parameter type.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};

use super::ToolError;

/// A tool that can be listed and called by name.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &'static str;

    /// Metadata advertised in `tools/list`.
    fn descriptor(&self) -> Tool;

    /// Decode the arguments and execute the tool.
    ///
    /// Protocol violations and domain failures both come back as
    /// [`ToolError`]; the caller decides how each is reported.
    async fn call(&self, arguments: Option<JsonObject>) -> Result<CallToolResult, ToolError>;
}
