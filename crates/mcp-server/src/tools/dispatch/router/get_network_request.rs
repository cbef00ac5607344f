use super::super::{CallToolResult, Content, GetNetworkRequestRequest, McpError, NetpageService};
use super::error::{attach_structured_content, invalid_request, source_unavailable, tool_error};
use netpage_capture::find_by_url;
use netpage_capture::render::render_request;

/// Look a request up by URL and remember it as the selected one.
pub(in crate::tools::dispatch) async fn get_network_request(
    service: &NetpageService,
    request: GetNetworkRequestRequest,
) -> Result<CallToolResult, McpError> {
    let url = request.url.trim();
    if url.is_empty() {
        return Ok(invalid_request("url must not be empty", None));
    }

    let records = match service.state.source.snapshot().await {
        Ok(records) => records,
        Err(err) => {
            log::warn!("get_network_request: {err}");
            return Ok(source_unavailable(&err));
        }
    };

    let Some(record) = find_by_url(&records, url) else {
        return Ok(tool_error(
            "not_found",
            format!("No request found for URL: {url}"),
            Some("Use list_network_requests to see the captured URLs.".to_string()),
        ));
    };

    *service.state.selected_url.lock().await = Some(record.url.clone());

    Ok(attach_structured_content(
        CallToolResult::success(vec![Content::text(render_request(record))]),
        record,
        "get_network_request",
    ))
}
