//! `bazaar` binary: fetch a listing search page and summarize prices.

mod cli;
mod output;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bazaar_core::{AnalyzerConfig, MarketReport};
use bazaar_extraction::PriceExtractor;
use bazaar_fetch::{build_query, build_search_url, city_slug, PageFetcher};
use bazaar_stats::{summarize, OutlierFilter};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let report = run(&cli).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", output::render(&report));
    }

    Ok(())
}

async fn run(cli: &Cli) -> anyhow::Result<MarketReport> {
    let mut config = AnalyzerConfig::default();
    config.fetch.timeout_secs = cli.timeout_secs;

    let Some(slug) = city_slug(&cli.city) else {
        bail!("unknown city: {}", cli.city);
    };

    let name = cli.name.trim();
    if name.is_empty() {
        bail!("car name cannot be empty");
    }

    let query = build_query(name, &cli.year);
    let url = build_search_url(&config.fetch.base_url, slug, &query);

    let fetcher = PageFetcher::new(&config.fetch)?;
    let html = fetcher
        .fetch(&url)
        .await
        .with_context(|| format!("failed to fetch {url}"))?;
    let fetched_at = Utc::now();

    let extractor = PriceExtractor::new(config.extractor.clone());
    let (prices, stats) = extractor.extract_report(&html);
    info!(?stats, "extraction finished");

    if prices.is_empty() {
        bail!("no prices found; try a simpler query or another city");
    }
    let raw_count = prices.len();

    let prices = if cli.keep_outliers {
        prices
    } else {
        OutlierFilter::new(config.outlier.clone()).filter(&prices)
    };
    if prices.is_empty() {
        bail!("no prices left after outlier filtering");
    }

    let summary = summarize(&prices)?;

    Ok(MarketReport {
        query,
        url,
        raw_count,
        filtered_count: prices.len(),
        summary,
        fetched_at,
    })
}
