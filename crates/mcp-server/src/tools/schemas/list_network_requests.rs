use netpage_core::{ListingOptions, PaginationOptions};
use netpage_protocol::RequestTypeFilter;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListNetworkRequestsRequest {
    /// Maximum number of requests per page.
    ///
    /// Omitting both `page_size` and `page_token` returns every captured request. Non-positive
    /// sizes fall back to the default page size; sizes above 100 are rejected by the router.
    #[schemars(
        description = "Maximum number of requests to return (at most 100). Zero or negative values use the default page size. Omit together with pageToken to return every request.",
        range(max = 100)
    )]
    pub page_size: Option<i64>,

    /// Opaque token from a previous response
    #[schemars(
        description = "Opaque token from a previous nextPageToken/previousPageToken. Only valid with the same requestType."
    )]
    pub page_token: Option<String>,

    /// Resource type filter
    #[schemars(
        description = "Only return requests of this resource type (or of any of these types). Unrecognized types are ignored."
    )]
    pub request_type: Option<RequestTypeFilter>,
}

impl ListNetworkRequestsRequest {
    pub fn into_listing_options(self) -> ListingOptions {
        ListingOptions::new(
            PaginationOptions {
                page_size: self.page_size,
                page_token: self.page_token,
            },
            self.request_type,
        )
    }
}
