//! MCP Server Entry Point
//!
//! Parses the SearXNG instance URL, initializes logging, loads the rest of
//! the configuration from the environment and serves until the client
//! disconnects or Ctrl-C is received.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use searxng_mcp_server::core::{Config, McpServer, SearxngConfig, TransportService};

/// MCP server exposing a SearXNG instance as a `search` tool.
#[derive(Debug, Parser)]
#[command(name = "searxng-mcp-server", version, about)]
#[command(
    after_help = "Example: searxng-mcp-server --instance=https://your-searxng-instance.com"
)]
struct Cli {
    /// Base URL of the SearXNG instance (e.g. https://searx.example.org)
    #[arg(long, env = "SEARXNG_BASE_URL", value_name = "URL", value_parser = parse_instance)]
    instance: SearxngConfig,
}

fn parse_instance(raw: &str) -> std::result::Result<SearxngConfig, String> {
    SearxngConfig::parse(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap so SEARXNG_BASE_URL can come from it.
    dotenvy::dotenv().ok();

    // Exits with usage on stderr and a non-zero status if the URL is
    // missing or malformed.
    let cli = Cli::parse();

    let config = Config::from_env(cli.instance);

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    config.log_summary();

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config)?;

    info!("Server initialized");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    transport.run(server, shutdown).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the STDIO transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
