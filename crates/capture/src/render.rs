//! Markdown rendering of listings and single requests.

use netpage_protocol::ListingResult;
use std::fmt::Write as _;

use crate::record::NetworkRequest;

pub const INVALID_TOKEN_NOTICE: &str = "Invalid page token provided, showing first page.";
pub const EMPTY_LISTING_NOTICE: &str = "No requests found.";

/// One line per request: `<url> <method> <status>`.
fn short_description(request: &NetworkRequest) -> String {
    format!("{} {} {}", request.url, request.method, request.state())
}

/// Render a listing page. `selected_url` marks the request most recently fetched in detail.
pub fn render_listing(
    listing: &ListingResult<&NetworkRequest>,
    selected_url: Option<&str>,
) -> String {
    let page = &listing.page;
    let mut lines: Vec<String> = vec!["## Network requests".to_string()];

    if let Some(applied) = listing.applied_request_type.as_deref() {
        let names: Vec<&str> = applied.iter().map(|ty| ty.as_str()).collect();
        lines.push(format!("Filtered by type: {}", names.join(", ")));
    }
    if page.invalid_token {
        lines.push(INVALID_TOKEN_NOTICE.to_string());
    }
    if page.items.is_empty() {
        lines.push(EMPTY_LISTING_NOTICE.to_string());
        return lines.join("\n");
    }

    lines.push(format!(
        "Showing {}-{} of {}.",
        page.start_index + 1,
        page.end_index,
        page.total
    ));
    if let Some(next) = page.next_page_token.as_deref() {
        lines.push(format!("Next page token: {next}"));
    }
    if let Some(previous) = page.previous_page_token.as_deref() {
        lines.push(format!("Previous page token: {previous}"));
    }

    for request in &page.items {
        let mut line = short_description(request);
        if selected_url == Some(request.url.as_str()) {
            line.push_str(" [selected]");
        }
        lines.push(line);
    }
    lines.join("\n")
}

pub fn render_request(request: &NetworkRequest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## Request {}", request.url);
    let _ = writeln!(out, "Method: {}", request.method);
    let _ = writeln!(out, "Type: {}", request.resource_type);
    let _ = writeln!(out, "Status: {}", request.state());
    if let Some(duration) = request.duration_ms {
        let _ = writeln!(out, "Duration: {duration} ms");
    }
    for (title, headers) in [
        ("Request Headers", &request.request_headers),
        ("Response Headers", &request.response_headers),
    ] {
        if headers.is_empty() {
            continue;
        }
        let _ = writeln!(out, "### {title}");
        for (name, value) in headers {
            let _ = writeln!(out, "- {name}:{value}");
        }
    }
    out.truncate(out.trim_end().len());
    out
}
