use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use netpage_capture::render::{render_listing, render_request};
use netpage_capture::{find_by_url, CaptureFile, NetworkRequest, RequestSource};
use netpage_core::{ListingOptions, ListingService, PaginationConfig, PaginationOptions};
use netpage_protocol::{RequestTypeFilter, ResourceType};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "netpage")]
#[command(about = "Page through network requests captured during a browsing session", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List captured requests, optionally paged and filtered by resource type
    List(ListArgs),

    /// Show one captured request by URL
    Get(GetArgs),

    /// Print the recognized resource types
    Types,
}

#[derive(Args)]
struct ListArgs {
    /// JSON Lines capture log (one request per line)
    #[arg(long)]
    capture: PathBuf,

    /// Requests per page (non-positive values fall back to the default page size)
    #[arg(long, allow_negative_numbers = true)]
    page_size: Option<i64>,

    /// Token from a previous listing (next/previous page token)
    #[arg(long)]
    page_token: Option<String>,

    /// Resource type to keep; repeat for several. Unrecognized types are ignored.
    #[arg(long = "type", value_name = "TYPE")]
    types: Vec<String>,

    /// Print the structured result as JSON instead of markdown
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GetArgs {
    /// JSON Lines capture log (one request per line)
    #[arg(long)]
    capture: PathBuf,

    /// Request URL, exactly as listed
    #[arg(long)]
    url: String,

    /// Print the record as JSON instead of markdown
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout is reserved for listing output
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::List(args) => run_list(args).await,
        Commands::Get(args) => run_get(args).await,
        Commands::Types => {
            for name in ResourceType::wire_names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

async fn load(capture: &Path) -> Result<Vec<NetworkRequest>> {
    let records = CaptureFile::new(capture)
        .snapshot()
        .await
        .with_context(|| format!("Failed to read capture {}", capture.display()))?;
    log::debug!("{} records in {}", records.len(), capture.display());
    Ok(records)
}

async fn run_list(args: ListArgs) -> Result<()> {
    let records = load(&args.capture).await?;

    let request_type = (!args.types.is_empty()).then(|| RequestTypeFilter::Many(args.types));
    let options = ListingOptions::new(
        PaginationOptions {
            page_size: args.page_size,
            page_token: args.page_token,
        },
        request_type,
    );

    let listing = ListingService::new(PaginationConfig::from_env()).list(&records, &options);
    if listing.page.invalid_token {
        log::warn!("page token was not usable for this listing; showing first page");
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&listing).context("serialize listing")?
        );
    } else {
        println!("{}", render_listing(&listing, None));
    }
    Ok(())
}

async fn run_get(args: GetArgs) -> Result<()> {
    let records = load(&args.capture).await?;
    let url = args.url.trim();
    let record = find_by_url(&records, url)
        .with_context(|| format!("No request found for URL: {url}"))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(record).context("serialize request")?
        );
    } else {
        println!("{}", render_request(record));
    }
    Ok(())
}
