use anyhow::{Context, Result};
use rmcp::{
    model::CallToolRequestParam,
    service::{RoleClient, RunningService, ServiceExt},
    transport::TokioChildProcess,
};
use serde_json::{json, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

fn locate_netpage_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_netpage-mcp") {
        return Ok(PathBuf::from(path));
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("netpage-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    anyhow::bail!("failed to locate netpage-mcp binary")
}

async fn start_service(capture: &Path) -> Result<RunningService<RoleClient, ()>> {
    let bin = locate_netpage_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "warn");
    cmd.env("NETPAGE_CAPTURE_FILE", capture);
    cmd.env_remove("NETPAGE_DEFAULT_PAGE_SIZE");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("initialize MCP session")
}

fn write_capture(path: &Path, count: usize, offset: usize) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("open capture")?;
    let kinds = ["document", "xhr", "script", "fetch"];
    for idx in offset..offset + count {
        let record = json!({
            "url": format!("https://site.test/{idx}"),
            "method": "GET",
            "resourceType": kinds[idx % kinds.len()],
            "status": 200,
        });
        writeln!(file, "{record}").context("append capture record")?;
    }
    Ok(())
}

async fn call_tool(
    service: &RunningService<RoleClient, ()>,
    name: &str,
    args: Value,
) -> Result<rmcp::model::CallToolResult> {
    tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling tool")?
    .context("call tool")
}

fn tool_text(result: &rmcp::model::CallToolResult) -> Result<&str> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("tool did not return text output")
}

fn structured(result: &rmcp::model::CallToolResult) -> Result<&Value> {
    result
        .structured_content
        .as_ref()
        .context("tool did not return structured content")
}

#[tokio::test]
async fn tools_are_listed_with_allow_listed_request_types() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let service = start_service(&tmp.path().join("capture.jsonl")).await?;

    let tools = service.list_all_tools().await.context("list tools")?;
    let names: Vec<&str> = tools.iter().map(|tool| tool.name.as_ref()).collect();
    assert!(names.contains(&"list_network_requests"));
    assert!(names.contains(&"get_network_request"));

    let list_tool = tools
        .iter()
        .find(|tool| tool.name == "list_network_requests")
        .context("list_network_requests tool")?;
    let schema = serde_json::to_string(&list_tool.input_schema).context("schema json")?;
    for name in ["requestType", "pageSize", "pageToken", "cspviolationreport", "websocket"] {
        assert!(schema.contains(name), "schema should mention {name}: {schema}");
    }

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn following_next_tokens_visits_every_request_once() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let capture = tmp.path().join("capture.jsonl");
    write_capture(&capture, 23, 0)?;
    let service = start_service(&capture).await?;

    let mut token: Option<String> = None;
    let mut seen: Vec<String> = Vec::new();
    for _ in 0..10usize {
        let result = call_tool(
            &service,
            "list_network_requests",
            json!({ "pageSize": 5, "pageToken": token }),
        )
        .await?;
        assert_ne!(result.is_error, Some(true), "list_network_requests failed");
        let body = structured(&result)?;
        assert_eq!(body["invalidToken"], json!(false));
        for item in body["items"].as_array().context("items")? {
            seen.push(item["url"].as_str().context("url")?.to_string());
        }
        token = body["nextPageToken"].as_str().map(str::to_string);
        if token.is_none() {
            break;
        }
    }

    let expected: Vec<String> = (0..23).map(|idx| format!("https://site.test/{idx}")).collect();
    assert_eq!(seen, expected);

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn live_capture_growth_is_visible_between_calls() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let capture = tmp.path().join("capture.jsonl");
    write_capture(&capture, 4, 0)?;
    let service = start_service(&capture).await?;

    let result = call_tool(
        &service,
        "list_network_requests",
        json!({ "pageSize": 2, "requestType": "xhr" }),
    )
    .await?;
    let body = structured(&result)?;
    assert_eq!(body["total"], json!(1));
    assert!(body.get("nextPageToken").is_none());

    write_capture(&capture, 8, 4)?;

    let result = call_tool(
        &service,
        "list_network_requests",
        json!({ "pageSize": 2, "requestType": ["xhr"] }),
    )
    .await?;
    let body = structured(&result)?;
    assert_eq!(body["total"], json!(3));
    assert_eq!(body["nextPageToken"], json!("2"));
    assert_eq!(body["appliedRequestType"], json!(["xhr"]));

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn invalid_token_and_detail_lookup() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let capture = tmp.path().join("capture.jsonl");
    write_capture(&capture, 5, 0)?;
    let service = start_service(&capture).await?;

    let result = call_tool(
        &service,
        "list_network_requests",
        json!({ "pageSize": 2, "pageToken": "invalid" }),
    )
    .await?;
    assert_ne!(result.is_error, Some(true));
    assert!(tool_text(&result)?.contains("Invalid page token provided, showing first page."));
    assert_eq!(structured(&result)?["startIndex"], json!(0));

    let result = call_tool(
        &service,
        "get_network_request",
        json!({ "url": "https://site.test/3" }),
    )
    .await?;
    assert_ne!(result.is_error, Some(true));
    assert!(tool_text(&result)?.contains("Type: fetch"));

    let result = call_tool(
        &service,
        "get_network_request",
        json!({ "url": "https://site.test/404" }),
    )
    .await?;
    assert_eq!(result.is_error, Some(true));

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}
