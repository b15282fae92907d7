//! Arguments accepted by the `search` tool.
//!
//! The struct doubles as the tool's input schema (via `schemars`) and as the
//! fixed, ordered list of keys forwarded to SearXNG. Keys outside the schema
//! are dropped during deserialization.

use rmcp::model::JsonObject;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;

use super::format::{OutputFormat, deserialize_lenient};
use crate::domains::tools::ToolError;

/// Message returned when `q` is absent, empty, or not a string.
pub const MISSING_QUERY: &str = "Missing required argument: 'q'";

/// Parameters for a SearXNG search.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[schemars(description = "Arguments for the SearxNG search tool. The 'q' parameter is mandatory.")]
pub struct SearchParams {
    #[schemars(description = "The search query string (REQUIRED). Example: \"n8n automation\"")]
    pub q: String,

    #[schemars(
        description = "Optional: Comma separated list of search categories (e.g., \"general,images\")"
    )]
    pub categories: Option<String>,

    #[schemars(
        description = "Optional: Comma separated list of search engines to use (e.g., \"google,brave\")"
    )]
    pub engines: Option<String>,

    #[schemars(description = "Optional: Language code for the search (e.g., \"en\", \"de\")")]
    pub language: Option<String>,

    #[schemars(description = "Optional: Time range for search results")]
    pub time_range: Option<TimeRange>,

    #[schemars(description = "Optional: Safe search level (0: None, 1: Moderate, 2: Strict)")]
    pub safesearch: Option<SafeSearch>,

    #[schemars(description = "Optional: Proxy image results through SearxNG (true/false)")]
    pub image_proxy: Option<bool>,

    #[schemars(description = "Optional: Comma-separated list of enabled plugins")]
    pub enabled_plugins: Option<String>,

    #[schemars(description = "Optional: Comma-separated list of disabled plugins")]
    pub disabled_plugins: Option<String>,

    #[schemars(
        description = "Optional: Comma-separated list of enabled engines (overrides general engines list)"
    )]
    pub enabled_engines: Option<String>,

    #[schemars(description = "Optional: Comma-separated list of disabled engines")]
    pub disabled_engines: Option<String>,

    /// Resolved output format. Unknown values have already fallen back to json.
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "OutputFormat", description = "Optional: Output format of the results (default: json)")]
    pub format: OutputFormat,
}

impl SearchParams {
    /// Validate and decode the raw arguments of a `tools/call` request.
    ///
    /// `q` is checked first so that a missing query always yields the same
    /// message, whatever else is wrong with the arguments.
    pub fn from_arguments(arguments: Option<JsonObject>) -> Result<Self, ToolError> {
        let arguments = arguments.unwrap_or_default();

        let has_query = arguments
            .get("q")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|q| !q.is_empty());
        if !has_query {
            return Err(ToolError::invalid_arguments(MISSING_QUERY));
        }

        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(format!("Invalid arguments: {}", e)))
    }

    /// Query parameters forwarded to SearXNG, `format` excluded.
    ///
    /// Order: `q`, then the optional fields in declaration order; undefined
    /// fields are skipped.
    pub fn query_pairs(&self) -> Vec<(&'static str, Cow<'_, str>)> {
        let optional: [(&'static str, Option<Cow<'_, str>>); 10] = [
            ("categories", self.categories.as_deref().map(Cow::Borrowed)),
            ("engines", self.engines.as_deref().map(Cow::Borrowed)),
            ("language", self.language.as_deref().map(Cow::Borrowed)),
            ("time_range", self.time_range.map(|t| Cow::Borrowed(t.as_str()))),
            ("safesearch", self.safesearch.map(|s| Cow::Owned(s.to_string()))),
            ("image_proxy", self.image_proxy.map(|b| Cow::Borrowed(bool_token(b)))),
            ("enabled_plugins", self.enabled_plugins.as_deref().map(Cow::Borrowed)),
            ("disabled_plugins", self.disabled_plugins.as_deref().map(Cow::Borrowed)),
            ("enabled_engines", self.enabled_engines.as_deref().map(Cow::Borrowed)),
            ("disabled_engines", self.disabled_engines.as_deref().map(Cow::Borrowed)),
        ];

        std::iter::once(("q", Cow::Borrowed(self.q.as_str())))
            .chain(
                optional
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v))),
            )
            .collect()
    }
}

fn bool_token(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Recency filter understood by SearXNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Month,
    Year,
}

impl TimeRange {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Safe search level: 0 (none), 1 (moderate) or 2 (strict).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub struct SafeSearch(u8);

impl SafeSearch {
    pub const MAX: u8 = 2;

    pub fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SafeSearch {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if level <= Self::MAX {
            Ok(Self(level))
        } else {
            Err(format!("safesearch must be 0, 1 or 2 (got {})", level))
        }
    }
}

impl fmt::Display for SafeSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl JsonSchema for SafeSearch {
    fn schema_name() -> Cow<'static, str> {
        "SafeSearch".into()
    }

    fn inline_schema() -> bool {
        true
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "enum": [0, 1, 2]
        })
    }
}
