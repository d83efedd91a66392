use crate::models::StrategyOutput;
use crate::normalize::adjust_possible_cents;
use crate::parser::Page;
use crate::signals::{meta, structured, text};

use super::{Step, first_candidate};

const VISTA_STEPS: &[Step] = &[
    ("structured", structured::product_price),
    ("meta", meta::meta_price),
    ("keyword", text::keyword_price),
    ("lowest_literal", text::lowest_literal),
];

pub fn extract(page: &Page) -> StrategyOutput {
    StrategyOutput {
        title: structured::product_name(page),
        price_vista: first_candidate(page, VISTA_STEPS).and_then(adjust_possible_cents),
        price_parcelado: text::installment_total(page),
    }
}
