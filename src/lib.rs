//! Cash ("à vista") and installment ("parcelado") price extraction for
//! Brazilian e-commerce product pages.
//!
//! A page is parsed once, the hostname picks a site strategy, the strategy
//! walks its ordered signals, and the reconciler fills a missing price from
//! the other one.

pub mod archiver;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod reconcile;
pub mod signals;
pub mod site;
pub mod strategy;

use tracing::info;
use url::Url;

pub use error::ExtractError;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use models::{ExtractionResult, Inference, Source, Strategy};

use crate::parser::Page;

/// Validate an absolute http(s) URL with a host.
pub fn parse_target(url: &str) -> Result<Url, ExtractError> {
    let invalid = |reason: String| ExtractError::InvalidUrl {
        url: url.to_string(),
        reason,
    };
    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(parsed)
}

/// Run the extraction pipeline over HTML that was already fetched.
pub fn extract_from_html(url: &Url, html: &str) -> ExtractionResult {
    let hostname = url.host_str().unwrap_or_default();
    let page = Page::parse(html);
    let strategy = site::select(hostname);
    let output = strategy::run(strategy, &page);
    let result = reconcile::reconcile(url.as_str(), hostname, strategy, output, page.title());

    info!(
        hostname,
        strategy = strategy.as_str(),
        price_vista = ?result.price_vista,
        price_parcelado = ?result.price_parcelado,
        inferred = ?result.source.inferred,
        "extracted prices"
    );
    result
}

/// Fetch `url` and extract its prices.
///
/// Fails on a malformed URL or a fetch fault; a page without prices is a
/// successful result with both prices absent.
pub fn extract_product(
    url: &str,
    fetcher: &impl PageFetcher,
) -> Result<ExtractionResult, ExtractError> {
    let target = parse_target(url)?;
    let html = fetcher.fetch_html(&target)?;
    let mut result = extract_from_html(&target, &html);
    result.url = url.to_string();
    Ok(result)
}
