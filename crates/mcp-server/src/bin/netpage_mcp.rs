use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    netpage_mcp::main_entry().await
}
