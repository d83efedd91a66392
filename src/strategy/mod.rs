//! Per-site extraction strategies.
//!
//! Each strategy is a fixed, ordered list of price signals per field. The
//! first signal that yields a value wins; the rest are never evaluated.

mod generic;
mod kabum;
mod mercadolivre;
mod pichau;

use tracing::debug;

use crate::models::{Strategy, StrategyOutput};
use crate::parser::Page;
use crate::signals::{meta, structured, text};

/// A named price signal.
pub type Step = (&'static str, fn(&Page) -> Option<f64>);

/// Run `steps` in order and return the first candidate.
pub fn first_candidate(page: &Page, steps: &[Step]) -> Option<f64> {
    steps.iter().find_map(|(name, step)| {
        let candidate = step(page)?;
        debug!("step {} produced {}", name, candidate);
        Some(candidate)
    })
}

/// Cash-price signals shared by the Kabum and Pichau storefronts.
pub(crate) const STORE_VISTA_STEPS: &[Step] = &[
    ("structured", structured::product_price),
    ("meta", meta::meta_price),
    ("payment_context", text::payment_context_price),
    ("keyword", text::keyword_price),
];

pub fn run(strategy: Strategy, page: &Page) -> StrategyOutput {
    match strategy {
        Strategy::Kabum => kabum::extract(page),
        Strategy::Pichau => pichau::extract(page),
        Strategy::MercadoLivre => mercadolivre::extract(page),
        Strategy::Generic => generic::extract(page),
    }
}
