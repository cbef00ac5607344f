// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod error;
pub(super) mod get_network_request;
pub(super) mod list_network_requests;
