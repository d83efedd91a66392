use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use price_extractor::config::FetchConfig;
use price_extractor::models::{ErrorBody, Outcome};
use price_extractor::normalize::format_brl;
use price_extractor::{HttpFetcher, archiver, extract_product};

#[derive(Parser)]
#[command(
    name = "price_extractor",
    about = "Extract cash and installment prices from product pages",
    version
)]
struct Cli {
    /// Product page URLs
    #[arg(required = true)]
    urls: Vec<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Print one human-readable line per URL instead of JSON
    #[arg(long)]
    summary: bool,

    /// Also write all outcomes to this file
    #[arg(long)]
    archive: Option<PathBuf>,

    /// Page fetch timeout in seconds
    #[arg(long, default_value_t = 20)]
    timeout_secs: u64,

    /// Override the browser User-Agent
    #[arg(long)]
    user_agent: Option<String>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = FetchConfig {
        timeout: Duration::from_secs(cli.timeout_secs),
        ..FetchConfig::default()
    };
    if let Some(ua) = &cli.user_agent {
        config.user_agent = ua.clone();
    }
    let fetcher = HttpFetcher::new(&config)?;

    let outcomes: Vec<Outcome> = cli
        .urls
        .iter()
        .map(|url| match extract_product(url, &fetcher) {
            Ok(result) => Outcome::Extracted(result),
            Err(e) => {
                tracing::error!("{}: {}", url, e);
                Outcome::Failed(ErrorBody::collect_failed(e))
            }
        })
        .collect();

    if cli.summary {
        for (url, outcome) in cli.urls.iter().zip(&outcomes) {
            match outcome {
                Outcome::Extracted(r) => println!(
                    "{}\t{}\tà vista {}\tparcelado {}\t[{}]",
                    r.title.as_deref().unwrap_or(url.as_str()),
                    r.source.hostname,
                    format_brl(r.price_vista),
                    format_brl(r.price_parcelado),
                    r.source.strategy.as_str(),
                ),
                Outcome::Failed(e) => println!("{}\t{}: {}", url, e.error, e.details),
            }
        }
    } else {
        let json = match (outcomes.as_slice(), cli.pretty) {
            ([single], true) => serde_json::to_string_pretty(single)?,
            ([single], false) => serde_json::to_string(single)?,
            (all, true) => serde_json::to_string_pretty(all)?,
            (all, false) => serde_json::to_string(all)?,
        };
        println!("{}", json);
    }

    if let Some(path) = &cli.archive {
        archiver::save_to_file(&outcomes, path)?;
        tracing::info!("archived {} results to {}", outcomes.len(), path.display());
    }

    let failed = outcomes.iter().any(|o| matches!(o, Outcome::Failed(_)));
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
