//! # opengraph CLI
//!
//! Command-line access to Open Graph extraction.
//!
//! - `fetch`: retrieve a page over HTTP and print its Open Graph data
//! - `parse`: read HTML from a file (or `-` for stdin) and print its data
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand};
use opengraph::{FetcherConfig, GraphObject, HttpFetcher};
use tokio::io::AsyncReadExt;
use tracing::instrument;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(author, version, about = "Extract Open Graph metadata from HTML documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a page and print its Open Graph data
    Fetch(FetchArgs),

    /// Parse an HTML file and print its Open Graph data
    Parse(ParseArgs),
}

#[derive(Args, Debug)]
struct FetchArgs {
    /// URL to fetch
    #[arg(required = true)]
    url: String,

    /// Show data even when mandatory attributes are missing
    #[arg(short, long)]
    lenient: bool,

    /// User agent to send
    #[arg(short, long)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    timeout: u64,
}

#[derive(Args, Debug)]
struct ParseArgs {
    /// HTML file to parse, or `-` for stdin
    #[arg(required = true)]
    source: String,

    /// Show data even when mandatory attributes are missing
    #[arg(short, long)]
    lenient: bool,
}

fn init_tracing_subscriber() {
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(console_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_subscriber();

    let object = match cli.command {
        Commands::Fetch(args) => fetch_command(args).await?,
        Commands::Parse(args) => parse_command(args).await?,
    };

    print_object(&object);
    Ok(())
}

fn build_fetcher(args: &FetchArgs) -> opengraph::Result<HttpFetcher> {
    let mut builder = FetcherConfig::builder().timeout_secs(args.timeout);
    if let Some(user_agent) = &args.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }

    Ok(HttpFetcher::new(builder.build())?)
}

#[instrument]
async fn fetch_command(args: FetchArgs) -> anyhow::Result<GraphObject> {
    let fetcher = build_fetcher(&args)?;

    opengraph::fetch_with(&fetcher, &args.url, !args.lenient)
        .await
        .ok_or_else(|| anyhow!("No Open Graph data found at {}", args.url))
}

async fn read_source(source: &str) -> opengraph::Result<String> {
    if source == "-" {
        let mut html = String::new();
        tokio::io::stdin().read_to_string(&mut html).await?;
        Ok(html)
    } else {
        Ok(tokio::fs::read_to_string(source).await?)
    }
}

#[instrument]
async fn parse_command(args: ParseArgs) -> anyhow::Result<GraphObject> {
    let html = read_source(&args.source).await?;

    opengraph::parse(&html, !args.lenient)
        .ok_or_else(|| anyhow!("No Open Graph data found in {}", args.source))
}

fn print_object(object: &GraphObject) {
    println!("type: {}", object.object_type().unwrap_or("(none)"));
    println!(
        "schema: {}",
        object
            .schema()
            .map(|schema| schema.to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );

    let missing = object.missing_attributes();
    if missing.is_empty() {
        println!("valid: yes");
    } else {
        println!("valid: no (missing {})", missing.join(", "));
    }

    println!();
    print!("{}", object);
}
