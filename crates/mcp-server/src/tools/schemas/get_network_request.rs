use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetNetworkRequestRequest {
    /// URL of the request
    #[schemars(
        description = "URL of the request, exactly as printed by list_network_requests. The first captured request with this URL is returned."
    )]
    pub url: String,
}
