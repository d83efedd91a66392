//! Mercado Livre listings mix the product price with shipping, coupons and
//! per-installment amounts, so every signal here carries a plausibility floor.

use std::sync::LazyLock;

use scraper::Selector;

use crate::config::{
    ML_FRAGMENT_MIN, ML_HIGH_PRICE_MARGIN, ML_PIX_MIN, ML_SCAN_BAND, ML_STRUCTURED_MIN,
};
use crate::models::StrategyOutput;
use crate::normalize::round_to_cents;
use crate::parser::Page;
use crate::signals::{structured, text};

static PRICE_FRAGMENTS: LazyLock<[Selector; 5]> = LazyLock::new(|| {
    [
        r#"[data-testid="price"]"#,
        ".ui-pdp-price__second-line .andes-money-amount__fraction",
        ".andes-money-amount--cents-superscript + .andes-money-amount__fraction",
        ".ui-pdp-price .andes-money-amount__fraction",
        ".andes-money-amount__fraction",
    ]
    .map(|s| Selector::parse(s).expect("price fragment selector is valid"))
});

pub fn extract(page: &Page) -> StrategyOutput {
    let mut price_vista = text::pix_anchored_price(page, ML_PIX_MIN);
    let mut price_parcelado = text::interest_phrase_installments(page);

    if price_vista.is_none() {
        if let Some(product) = structured::product_node(page) {
            price_vista = structured::offer_price(&product, &["price", "lowPrice"])
                .filter(|p| *p >= ML_STRUCTURED_MIN);
            if price_parcelado.is_none() {
                let floor = price_vista.unwrap_or(0.0) * ML_HIGH_PRICE_MARGIN;
                price_parcelado =
                    structured::offer_price(&product, &["highPrice"]).filter(|hp| *hp > floor);
            }
        }
    }

    if price_vista.is_none() {
        price_vista = text::rendered_price(page, PRICE_FRAGMENTS.as_slice(), ML_FRAGMENT_MIN);
    }
    if price_parcelado.is_none() {
        price_parcelado = text::installment_total(page);
    }

    if price_vista.is_none() || price_parcelado.is_none() {
        let (low, high) = ML_SCAN_BAND;
        let plausible: Vec<f64> = text::all_brl(page)
            .into_iter()
            .filter(|v| (low..=high).contains(v))
            .collect();
        if price_vista.is_none() {
            price_vista = plausible.first().copied();
        }
        if price_parcelado.is_none() && plausible.len() >= 2 {
            price_parcelado = plausible.last().copied();
        }
    }

    StrategyOutput {
        title: None,
        price_vista: price_vista.and_then(round_to_cents),
        price_parcelado: price_parcelado.and_then(round_to_cents),
    }
}
