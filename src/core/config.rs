//! Configuration management for the MCP server.
//!
//! The SearXNG base endpoint comes from the command line (or
//! `SEARXNG_BASE_URL`) and is validated once here; everything else is
//! populated from `MCP_*` environment variables on top of defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream SearXNG instance.
    pub searxng: SearxngConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Location of the SearXNG instance every search is proxied to.
///
/// Only constructible through [`SearxngConfig::parse`], so a value of this
/// type always holds an absolute http(s) URL that can act as a base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearxngConfig {
    base_url: Url,
}

impl SearxngConfig {
    /// Validate a raw base endpoint such as `https://searx.example.org/`.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::config("SearXNG instance URL is empty"));
        }

        let base_url = Url::parse(raw)
            .map_err(|e| Error::config(format!("Invalid SearXNG instance URL '{}': {}", raw, e)))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Unsupported scheme '{}' in SearXNG instance URL (expected http or https)",
                base_url.scheme()
            )));
        }

        if base_url.cannot_be_a_base() || base_url.host_str().is_none() {
            return Err(Error::config(format!(
                "SearXNG instance URL '{}' cannot be used as a base URL",
                raw
            )));
        }

        Ok(Self { base_url })
    }

    /// The validated base endpoint.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Config {
    /// Create a configuration with default values for everything except the
    /// upstream instance, which has no sensible default.
    pub fn new(searxng: SearxngConfig) -> Self {
        Self {
            server: ServerConfig {
                name: "searxng".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            searxng,
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`. A `.env` file, if
    /// any, must already have been loaded by the caller.
    pub fn from_env(searxng: SearxngConfig) -> Self {
        let mut config = Self::new(searxng);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config
    }

    /// Log the effective configuration. Called once logging is initialized.
    pub fn log_summary(&self) {
        info!("SearXNG instance: {}", self.searxng.base_url());
        info!("Transport: {}", self.transport.description());
    }
}
