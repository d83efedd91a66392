//! Empirical thresholds and fetch settings.
//!
//! The numeric bounds below were tuned against the storefronts we scrape;
//! they are heuristics, not invariants, and differ per extractor on purpose.

use std::time::Duration;

/// An integer band that is assumed to be stored in minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinorUnitBand {
    /// Lower bound of the band.
    pub lower: f64,
    /// Upper bound of the band.
    pub upper: f64,
    /// Whether `lower` itself belongs to the band.
    pub lower_inclusive: bool,
    /// Whether `upper` itself belongs to the band.
    pub upper_inclusive: bool,
    /// Reject whole multiples of 100 (e.g. 200 stays 200).
    pub skip_hundreds: bool,
}

/// Broad sweep used on embedded-state numbers and installment totals:
/// integers in `(1000, 500000]`.
pub const BROAD_MINOR_UNITS: MinorUnitBand = MinorUnitBand {
    lower: 1000.0,
    upper: 500_000.0,
    lower_inclusive: false,
    upper_inclusive: true,
    skip_hundreds: false,
};

/// Conservative sweep applied only when presenting a price:
/// integers in `[50, 500)` that are not multiples of 100.
pub const NARROW_MINOR_UNITS: MinorUnitBand = MinorUnitBand {
    lower: 50.0,
    upper: 500.0,
    lower_inclusive: true,
    upper_inclusive: false,
    skip_hundreds: true,
};

/// Maximum characters between a payment keyword and the `R$` literal.
pub const KEYWORD_WINDOW: usize = 80;

/// Same window for the ordered payment-context patterns.
pub const PAYMENT_CONTEXT_WINDOW: usize = 60;

/// Values at or below this are dropped from the exhaustive currency scan.
pub const SCAN_FLOOR: f64 = 1.0;

/// Embedded-state matches at or below this are noise.
pub const STATE_FLOOR: f64 = 0.05;

/// Mercado Livre: a "pix" price below this is a shipping fee or installment.
pub const ML_PIX_MIN: f64 = 500.0;

/// Mercado Livre: structured-data prices below this are ignored.
pub const ML_STRUCTURED_MIN: f64 = 100.0;

/// Mercado Livre: rendered price fragments must exceed this.
pub const ML_FRAGMENT_MIN: f64 = 100.0;

/// Mercado Livre: `offers.highPrice` must exceed the cash price by this factor
/// to count as an installment total.
pub const ML_HIGH_PRICE_MARGIN: f64 = 1.05;

/// Mercado Livre: plausible band for the exhaustive-scan fallback.
pub const ML_SCAN_BAND: (f64, f64) = (500.0, 50_000.0);

/// Cash price inferred from the installment total.
pub const VISTA_DISCOUNT: f64 = 0.95;

/// Settings for the page-fetch collaborator.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub accept_language: String,
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
                .to_string(),
            accept_language: "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7".to_string(),
            timeout: Duration::from_secs(20),
            max_redirects: 100,
        }
    }
}
