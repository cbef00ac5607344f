//! MCP tool dispatch for netpage
//!
//! Every tool call takes a fresh snapshot from the request source; the only per-connection state
//! is which request was last fetched in detail.

mod router;

use super::schemas::get_network_request::GetNetworkRequestRequest;
use super::schemas::list_network_requests::ListNetworkRequestsRequest;
use crate::config::ServerConfig;
use netpage_capture::RequestSource;
use netpage_core::ListingService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use std::sync::Arc;
use tokio::sync::Mutex;

/// netpage MCP Service
#[derive(Clone)]
pub struct NetpageService {
    /// Tool router
    tool_router: ToolRouter<Self>,
    /// Shared state (per-process)
    state: Arc<ServiceState>,
}

struct ServiceState {
    source: Arc<dyn RequestSource>,
    listing: ListingService,
    /// URL most recently passed to `get_network_request`; marked in the next listing.
    selected_url: Mutex<Option<String>>,
}

impl NetpageService {
    pub fn new(source: Arc<dyn RequestSource>, listing: ListingService) -> Self {
        Self {
            tool_router: Self::tool_router(),
            state: Arc::new(ServiceState {
                source,
                listing,
                selected_url: Mutex::new(None),
            }),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.request_source(),
            ListingService::new(config.pagination),
        )
    }
}

#[tool_router]
impl NetpageService {
    /// Paged, type-filtered listing of captured requests.
    #[tool(
        description = "List network requests captured in the current session. Without pageSize/pageToken every request is returned; otherwise follow nextPageToken/previousPageToken. Filter with requestType (one type or a list)."
    )]
    pub async fn list_network_requests(
        &self,
        Parameters(request): Parameters<ListNetworkRequestsRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::list_network_requests::list_network_requests(self, request).await
    }

    /// Details for one captured request.
    #[tool(
        description = "Get a captured network request by URL: method, type, status, timing, and request/response headers. The request is marked as selected in later listings."
    )]
    pub async fn get_network_request(
        &self,
        Parameters(request): Parameters<GetNetworkRequestRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::get_network_request::get_network_request(self, request).await
    }
}

#[tool_handler]
impl ServerHandler for NetpageService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("netpage lists the network requests captured during a browsing session. Use 'list_network_requests' to page through them (filter with requestType) and 'get_network_request' to inspect one by URL.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
