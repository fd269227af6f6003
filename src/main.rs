//! # bibscout CLI Application
//!
//! This module implements the command-line interface for the bibscout
//! pipeline, exposing each stage as a subcommand.
//!
//! ## Key Components
//!
//! - CLI argument parsing with clap
//! - Subcommands for the pipeline stages:
//!   - `wikipedia`: collect library candidates from Wikipedia
//!   - `keywords`: scan library websites for registration links
//!   - `summarize`: AI assessment of the harvested links
//!   - `report`: render bibliotheken.md from the candidate records
//!   - `show`: display a generated report in the terminal
//!
//! ## Features
//!
//! - Configurable fetching with rate and concurrency controls
//! - Progress tracking for the long-running summary batch
//! - JSON sinks between stages so each stage can be rerun alone
//!
//! The stages communicate only through their JSON files; running them in
//! order produces the complete set of reports from scratch.

mod telemetry;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{instrument, warn};
use url::Url;

use bibscout::crawler::{CrawlerConfig, DEFAULT_USER_AGENT, Fetcher};
use bibscout::keywords::KeywordSet;
use bibscout::summary::{LibrarySummary, SummaryClient};

const DEFAULT_LISTING_URL: &str =
    "https://de.wikipedia.org/wiki/Liste_deutscher_Stadtbibliotheken";

#[derive(Parser)]
#[command(author, version, about = "Collects registration metadata about German public libraries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Collect library candidates from the Wikipedia listing
    Wikipedia(WikipediaArgs),

    /// Scan library websites for registration-related links
    Keywords(KeywordsArgs),

    /// Summarize the harvested links with the AI service
    Summarize(SummarizeArgs),

    /// Render bibliotheken.md from the candidate records
    Report(ReportArgs),

    /// Display a generated Markdown report in the terminal
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct WikipediaArgs {
    /// Wikipedia listing page to start from
    #[arg(short, long, default_value = DEFAULT_LISTING_URL)]
    url: String,

    /// Output file for the candidate records
    #[arg(short, long, default_value = "bibliotheken.json")]
    output: PathBuf,

    /// Rate limit in milliseconds
    #[arg(short, long, default_value = "500")]
    rate: u64,

    /// User agent for requests
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Maximum number of pages fetched concurrently
    #[arg(short, long, default_value = "4")]
    concurrency: usize,
}

#[derive(Args, Debug)]
struct KeywordsArgs {
    /// Candidate records written by the wikipedia stage
    #[arg(long, default_value = "bibliotheken.json")]
    config: PathBuf,

    /// Output file for the match records
    #[arg(short, long, default_value = "urls.json")]
    output: PathBuf,

    /// Override the keyword set (comma-separated)
    #[arg(short, long)]
    keywords: Option<String>,

    /// Rate limit in milliseconds
    #[arg(short, long, default_value = "500")]
    rate: u64,

    /// User agent for requests
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Maximum number of pages fetched concurrently
    #[arg(short, long, default_value = "4")]
    concurrency: usize,
}

#[derive(Args, Debug)]
struct SummarizeArgs {
    /// Match records written by the keywords stage
    #[arg(short, long, default_value = "urls.json")]
    input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "libraries.md")]
    output: PathBuf,

    /// LLM model to use
    #[arg(short, long, default_value = "gemini-2.0-flash")]
    model: String,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Candidate records written by the wikipedia stage
    #[arg(short, long, default_value = "bibliotheken.json")]
    input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = "bibliotheken.md")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Report file to display
    #[arg(required = true)]
    file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing_subscriber();

    match cli.command {
        Some(Commands::Wikipedia(args)) => {
            wikipedia_command(args).await?;
        }
        Some(Commands::Keywords(args)) => {
            keywords_command(args).await?;
        }
        Some(Commands::Summarize(args)) => {
            summarize_command(args).await?;
        }
        Some(Commands::Report(args)) => {
            report_command(args).await?;
        }
        Some(Commands::Show(args)) => {
            show_command(args).await?;
        }
        None => {
            // If no command is provided, show help
            let _ = Cli::parse_from(["bibscout", "--help"]);
        }
    }

    Ok(())
}

#[instrument]
async fn wikipedia_command(args: WikipediaArgs) -> anyhow::Result<()> {
    println!("Crawling {}...", args.url);

    let config = CrawlerConfig::builder()
        .user_agent(args.user_agent.clone())
        .rate_limit_ms(args.rate)
        .max_concurrency(args.concurrency)
        .build();
    let fetcher = Fetcher::new(config)?;
    let listing_url = Url::parse(&args.url).context("invalid listing URL")?;

    let candidates = bibscout::wikipedia::crawl_listing(&fetcher, &listing_url).await?;
    println!("Collected {} library candidates", candidates.len());

    bibscout::store::write_records(&args.output, &candidates).await?;
    println!("Saved candidates to {}", args.output.display());

    Ok(())
}

#[instrument]
async fn keywords_command(args: KeywordsArgs) -> anyhow::Result<()> {
    let candidates = bibscout::store::load_candidates(&args.config).await?;
    let start_urls = bibscout::store::start_urls(&candidates)?;
    println!("Scanning {} library websites...", start_urls.len());

    let keywords = match &args.keywords {
        Some(list) => KeywordSet::new(list.split(','))?,
        None => KeywordSet::default(),
    };

    let config = CrawlerConfig::builder()
        .user_agent(args.user_agent.clone())
        .rate_limit_ms(args.rate)
        .max_concurrency(args.concurrency)
        .build();
    let fetcher = Fetcher::new(config)?;

    let results = bibscout::keywords::scan_websites(&fetcher, &start_urls, &keywords).await;
    println!("Scanned {} sites", results.len());

    bibscout::store::write_records(&args.output, &results).await?;
    println!("Saved match records to {}", args.output.display());

    Ok(())
}

#[instrument]
async fn summarize_command(args: SummarizeArgs) -> anyhow::Result<()> {
    let records = bibscout::store::load_matches(&args.input).await?;
    println!("Summarizing {} libraries...", records.len());

    let client = SummaryClient::new_from_env(&args.model)?;

    let progress_bar = ProgressBar::new(records.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta}) {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut summaries = Vec::with_capacity(records.len());
    for record in &records {
        progress_bar.set_message(record.source_url.clone());

        let urls = record.urls();
        let summary = if urls.is_empty() {
            // nothing to scan for this library
            None
        } else {
            match client.summarize(urls).await {
                Ok(answer) => Some(answer),
                Err(e) => {
                    warn!("Summary failed for {}: {}", record.source_url, e);
                    None
                }
            }
        };

        summaries.push(LibrarySummary {
            source_url: record.source_url.clone(),
            summary,
        });
        progress_bar.inc(1);
    }
    progress_bar.finish_with_message("Summaries completed");

    let markdown = bibscout::report::render_summaries(&summaries);
    tokio::fs::write(&args.output, markdown).await?;
    println!("Saved report to {}", args.output.display());

    Ok(())
}

#[instrument]
async fn report_command(args: ReportArgs) -> anyhow::Result<()> {
    let candidates = bibscout::store::load_candidates(&args.input).await?;

    let markdown = bibscout::report::render_candidates(&candidates);
    tokio::fs::write(&args.output, markdown).await?;
    println!(
        "Rendered {} entries to {}",
        candidates.len(),
        args.output.display()
    );

    Ok(())
}

#[instrument]
async fn show_command(args: ShowArgs) -> anyhow::Result<()> {
    let markdown = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    bibscout::report::format_markdown(&markdown)?;

    Ok(())
}
