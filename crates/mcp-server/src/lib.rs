//! netpage MCP server
//!
//! Gives AI agents a paged, type-filtered view over the network requests captured during a live
//! browsing session.
//!
//! ## Tools
//!
//! - `list_network_requests` - page through captured requests, optionally filtered by type
//! - `get_network_request` - show one request (status, headers) by URL
//!
//! ## Usage
//!
//! Point the server at the JSON Lines capture log written by the recording driver:
//! ```json
//! {
//!   "mcpServers": {
//!     "netpage": {
//!       "command": "netpage-mcp",
//!       "env": { "NETPAGE_CAPTURE_FILE": "/tmp/session.jsonl" }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

pub mod config;
mod tools;

pub use config::ServerConfig;
pub use tools::NetpageService;

pub async fn main_entry() -> Result<()> {
    // stdout carries the MCP protocol
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = ServerConfig::from_env();
    log::info!(
        "Starting netpage MCP server (source: {}, default page size: {})",
        config.source_label(),
        config.pagination.default_page_size
    );

    let service = NetpageService::from_config(&config);
    let server = service.serve(stdio()).await?;
    server.waiting().await?;

    log::info!("netpage MCP server stopped");
    Ok(())
}
