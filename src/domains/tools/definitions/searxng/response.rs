//! Conversion of SearXNG responses into tool output.
//!
//! The body is read exactly once, as text, and everything else works on
//! that string.

use reqwest::{Response, StatusCode};
use tracing::debug;

use super::format::OutputFormat;
use crate::domains::tools::ToolError;

/// Maximum number of characters of a non-JSON error body quoted back.
pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// Appended to an error body preview that was cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Consume the response and produce the text returned to the caller.
pub async fn read_response(response: Response, format: OutputFormat) -> Result<String, ToolError> {
    let status = response.status();

    if !status.is_success() {
        // The status alone is reported if the body cannot be read.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Failed to read SearxNG error body ({}): {}", status, e);
                String::new()
            }
        };
        return Err(upstream_failure(status, &body, format));
    }

    let body = response.text().await?;
    debug!("Received {} bytes of {} from SearxNG", body.len(), format);
    render_body(body, format)
}

/// Render a 2xx body: JSON is re-serialized with two-space indentation,
/// every other format is returned untouched.
pub fn render_body(body: String, format: OutputFormat) -> Result<String, ToolError> {
    match format {
        OutputFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
                ToolError::transport(format!("Invalid JSON in SearxNG response: {}", e))
            })?;
            serde_json::to_string_pretty(&value)
                .map_err(|e| ToolError::transport(format!("Failed to format JSON: {}", e)))
        }
        OutputFormat::Csv | OutputFormat::Rss | OutputFormat::Html => Ok(body),
    }
}

/// Build the failure for a non-2xx response.
pub fn upstream_failure(status: StatusCode, body: &str, format: OutputFormat) -> ToolError {
    ToolError::Upstream {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        detail: error_detail(body, format),
    }
}

/// Extra context pulled from an error body.
///
/// For JSON, the top-level string `message` if there is one. Otherwise a
/// preview of the raw text, capped at [`ERROR_BODY_PREVIEW_CHARS`].
pub fn error_detail(body: &str, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Json => serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("message")?
            .as_str()
            .map(str::to_owned),
        OutputFormat::Csv | OutputFormat::Rss | OutputFormat::Html => {
            if body.is_empty() {
                return None;
            }
            let mut preview: String = body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
            if preview.len() < body.len() {
                preview.push_str(TRUNCATION_MARKER);
            }
            Some(preview)
        }
    }
}
