//! SearXNG search tool.
//!
//! Proxies one `tools/call` to `GET <instance>/search` and hands the body
//! back as a single text block.

use async_trait::async_trait;
use reqwest::{Client, Url};
use rmcp::{
    handler::server::tool::schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use tracing::{debug, info, instrument};

use super::params::SearchParams;
use super::request::build_search_url;
use super::response::read_response;
use crate::core::config::SearxngConfig;
use crate::core::{Error, Result};
use crate::domains::tools::{ToolError, ToolHandler};

/// SearXNG Search Tool implementation.
#[derive(Debug, Clone)]
pub struct SearchTool {
    http: Client,
    base_url: Url,
}

impl SearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Perform a search using SearxNG for automation workflows";

    /// Create the tool with its own HTTP client.
    ///
    /// No request timeout is set; the client default applies.
    pub fn new(config: &SearxngConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(http, config))
    }

    /// Create the tool around an existing client.
    pub fn with_client(http: Client, config: &SearxngConfig) -> Self {
        Self {
            http,
            base_url: config.base_url().clone(),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SearchParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run one search and return the text for the reply.
    #[instrument(skip_all, fields(q = %params.q, format = %params.format))]
    pub async fn execute(&self, params: &SearchParams) -> std::result::Result<String, ToolError> {
        let url = build_search_url(&self.base_url, params, params.format);
        info!("Searching SearxNG for '{}'", params.q);
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        read_response(response, params.format).await
    }
}

#[async_trait]
impl ToolHandler for SearchTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> Tool {
        Self::to_tool()
    }

    async fn call(&self, arguments: Option<JsonObject>) -> std::result::Result<CallToolResult, ToolError> {
        let params = SearchParams::from_arguments(arguments)?;
        let text = self.execute(&params).await?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tool_for(uri: &str) -> SearchTool {
        SearchTool::new(&SearxngConfig::parse(uri).unwrap()).unwrap()
    }

    fn args(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_descriptor() {
        let tool = SearchTool::to_tool();
        assert_eq!(tool.name, "search");
        assert_eq!(tool.description.as_deref(), Some(SearchTool::DESCRIPTION));

        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["q"]));

        let properties = schema["properties"].as_object().unwrap();
        for key in [
            "q",
            "categories",
            "engines",
            "language",
            "time_range",
            "safesearch",
            "image_proxy",
            "enabled_plugins",
            "disabled_plugins",
            "enabled_engines",
            "disabled_engines",
            "format",
        ] {
            assert!(properties.contains_key(key), "missing property {}", key);
        }
        assert_eq!(properties.len(), 12);

        let rendered = schema.to_string();
        assert!(rendered.contains(r#""day","month","year""#));
        assert!(rendered.contains(r#""json","csv","rss","html""#));
        assert!(rendered.contains("[0,1,2"));
    }

    #[tokio::test]
    async fn test_json_search_pretty_printed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("format", "json"))
            .and(query_param("q", "n8n automation"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results":[]}"#))
            .expect(1)
            .mount(&server)
            .await;

        let result = tool_for(&server.uri())
            .call(args(json!({"q": "n8n automation"})))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(text_of(&result), "{\n  \"results\": []\n}");
    }

    #[tokio::test]
    async fn test_csv_returned_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("format", "csv"))
            .and(query_param("q", "x"))
            .respond_with(ResponseTemplate::new(200).set_body_string("a,b\n1,2"))
            .expect(1)
            .mount(&server)
            .await;

        let result = tool_for(&server.uri())
            .call(args(json!({"q": "x", "format": "csv"})))
            .await
            .unwrap();

        assert_eq!(text_of(&result), "a,b\n1,2");
    }

    #[tokio::test]
    async fn test_bogus_format_requests_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [1]})))
            .expect(1)
            .mount(&server)
            .await;

        let result = tool_for(&server.uri())
            .call(args(json!({"q": "x", "format": "bogus"})))
            .await
            .unwrap();

        assert_eq!(text_of(&result), "{\n  \"results\": [\n    1\n  ]\n}");
    }

    #[tokio::test]
    async fn test_html_sends_no_format() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>hi</body></html>"))
            .mount(&server)
            .await;

        let result = tool_for(&server.uri())
            .call(args(json!({"q": "x", "format": "html", "safesearch": 1})))
            .await
            .unwrap();
        assert_eq!(text_of(&result), "<html><body>hi</body></html>");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let keys: Vec<String> = requests[0]
            .url
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(keys, vec!["q", "safesearch"]);
    }

    #[tokio::test]
    async fn test_upstream_error_with_json_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "rate limited"})),
            )
            .mount(&server)
            .await;

        let err = tool_for(&server.uri())
            .call(args(json!({"q": "x"})))
            .await
            .unwrap_err();
        assert!(err.is_domain_failure());

        let result = err.into_call_result().unwrap();
        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.contains("500"));
        assert!(text.contains("rate limited"));
    }

    #[tokio::test]
    async fn test_upstream_error_with_long_text_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429).set_body_string("z".repeat(300)))
            .mount(&server)
            .await;

        let err = tool_for(&server.uri())
            .call(args(json!({"q": "x", "format": "rss"})))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("SearxNG API error: 429 Too Many Requests - {}...", "z".repeat(200))
        );
    }

    #[tokio::test]
    async fn test_malformed_json_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = tool_for(&server.uri())
            .call(args(json!({"q": "x"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Transport(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Reserve a port, then free it so nothing is listening there.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let err = tool_for(&format!("http://127.0.0.1:{}", port))
            .call(args(json!({"q": "x"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Transport(_)));

        let result = err.into_call_result().unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("Error executing search: "));
    }

    #[tokio::test]
    async fn test_unreadable_error_body_reports_status_only() {
        use std::io::{Read, Write};

        // Promises 100 bytes of body, sends 7, then hangs up.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\n\r\npartial",
            );
        });

        let err = tool_for(&format!("http://127.0.0.1:{}", port))
            .call(args(json!({"q": "x", "format": "csv"})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "SearxNG API error: 503 Service Unavailable");
    }

    #[tokio::test]
    async fn test_base_path_prefix_used() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/searx/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let result = tool_for(&format!("{}/searx", server.uri()))
            .call(args(json!({"q": "x"})))
            .await
            .unwrap();
        assert_eq!(text_of(&result), "{}");
    }
}
