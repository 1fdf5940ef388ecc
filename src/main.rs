// src/main.rs
mod api;
mod config;
mod extractors;
mod upstream;
mod utils;

#[cfg(test)]
mod test_support;

use clap::{Parser, Subcommand};
use config::Settings;
use extractors::{CaseCategory, PageLayout, DEFAULT_FOOTER_ROWS};
use std::net::SocketAddr;
use utils::AppError;

const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Republishes COVID-19 statistics scraped from the health ministry page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Page to scrape
    #[arg(long, global = true, env = "COVID_UPSTREAM_URL", default_value = upstream::DEFAULT_UPSTREAM_URL)]
    upstream_url: String,

    /// Marker set used to locate the case counts
    #[arg(long, global = true, value_enum, default_value = "nested")]
    layout: PageLayout,

    /// Trailing rows of the state table that are not regions
    #[arg(long, global = true, default_value_t = DEFAULT_FOOTER_ROWS)]
    footer_rows: usize,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API (default)
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },
    /// Fetch the page once and print the extracted values as JSON
    Scrape {
        #[command(subcommand)]
        target: ScrapeTarget,
    },
}

#[derive(Subcommand, Clone, Copy, Debug)]
enum ScrapeTarget {
    /// All four case counts
    Cases,
    /// A single case count
    Case {
        #[arg(value_enum)]
        category: CaseCategory,
    },
    /// Helpline, toll-free number and e-mail addresses
    Contact,
    /// Total vaccination doses
    Vaccination,
    /// Per-region statistics table
    Regions,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Parsed args: {:?}", args);

    let settings = Settings::new(&args.upstream_url, args.layout, args.footer_rows)?;

    match args.command {
        Some(Command::Serve { bind }) => api::serve(settings, bind).await,
        None => {
            let bind = DEFAULT_BIND
                .parse()
                .map_err(|e| AppError::Config(format!("Invalid default bind address: {}", e)))?;
            api::serve(settings, bind).await
        }
        Some(Command::Scrape { target }) => scrape_once(&settings, target).await,
    }
}

/// One fetch, one extraction, result on stdout.
async fn scrape_once(settings: &Settings, target: ScrapeTarget) -> Result<(), AppError> {
    tracing::info!("Scraping {:?} from {}", target, settings.upstream_url);
    let document = upstream::fetch_document(&settings.upstream_url).await?;
    let extractor = &settings.extractor;

    let output = match target {
        ScrapeTarget::Cases => serde_json::to_string_pretty(&extractor.extract_all_case_counts(&document)?)?,
        ScrapeTarget::Case { category } => serde_json::to_string_pretty(&serde_json::json!({
            "category": category,
            "count": extractor.extract_case_count(&document, category)?
        }))?,
        ScrapeTarget::Contact => serde_json::to_string_pretty(&extractor.extract_contact_info(&document)?)?,
        ScrapeTarget::Vaccination => serde_json::to_string_pretty(&serde_json::json!({
            "vaccination-count": extractor.extract_vaccination_count(&document)?
        }))?,
        ScrapeTarget::Regions => serde_json::to_string_pretty(&extractor.extract_region_stats(&document)?)?,
    };

    println!("{}", output);
    Ok(())
}
