//! Output format negotiation.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Representation requested from SearXNG and handed back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Rss,
    Html,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [Self::Json, Self::Csv, Self::Rss, Self::Html];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Rss => "rss",
            Self::Html => "html",
        }
    }

    /// Resolve the caller's raw `format` argument.
    ///
    /// Anything that is not one of the four known strings (missing, `null`,
    /// a number, `"JSON"`, `"bogus"`) falls back to [`OutputFormat::Json`]
    /// without an error.
    pub fn negotiate(raw: Option<&serde_json::Value>) -> Self {
        raw.and_then(serde_json::Value::as_str)
            .and_then(|s| Self::ALL.into_iter().find(|f| f.as_str() == s))
            .unwrap_or_default()
    }

    /// The value of the `format` query parameter, if one is sent at all.
    ///
    /// SearXNG answers with HTML when no format is given, so `html` is
    /// expressed by leaving the parameter out.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Self::Html => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `deserialize_with` adapter that never fails on the `format` field.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(OutputFormat::negotiate(raw.as_ref()))
}
