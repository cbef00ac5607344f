use super::super::{CallToolResult, Content, ListNetworkRequestsRequest, McpError, NetpageService};
use super::error::{attach_structured_content, invalid_request, source_unavailable};
use crate::config::MAX_PAGE_SIZE;
use netpage_capture::render::render_listing;

/// Filter-then-paginate over the current capture snapshot.
pub(in crate::tools::dispatch) async fn list_network_requests(
    service: &NetpageService,
    request: ListNetworkRequestsRequest,
) -> Result<CallToolResult, McpError> {
    if let Some(page_size) = request.page_size.filter(|size| *size > MAX_PAGE_SIZE) {
        return Ok(invalid_request(
            format!("pageSize must be at most {MAX_PAGE_SIZE} (got {page_size})"),
            Some("Follow nextPageToken to read further pages.".to_string()),
        ));
    }

    let records = match service.state.source.snapshot().await {
        Ok(records) => records,
        Err(err) => {
            log::warn!("list_network_requests: {err}");
            return Ok(source_unavailable(&err));
        }
    };

    let options = request.into_listing_options();
    let listing = service.state.listing.list(&records, &options);
    let selected_url = service.state.selected_url.lock().await.clone();

    let text = render_listing(&listing, selected_url.as_deref());
    Ok(attach_structured_content(
        CallToolResult::success(vec![Content::text(text)]),
        &listing,
        "list_network_requests",
    ))
}
