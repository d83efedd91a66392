use crate::models::StrategyOutput;
use crate::normalize::{adjust_possible_cents, round_to_cents};
use crate::parser::Page;
use crate::signals::{state, text};

use super::{STORE_VISTA_STEPS, Step, first_candidate};

const PARCELADO_STEPS: &[Step] = &[
    ("installments", text::installment_total),
    ("state_installments", state::state_installment_total),
    ("highest_literal", text::highest_literal),
];

const STATE_VISTA_STEPS: &[Step] = &[("state_cash", state::cheapest_cash_price)];

/// Pichau renders most prices client-side, so the embedded Next.js state is
/// the last resort for the cash price. State values are already corrected
/// for minor units.
pub fn extract(page: &Page) -> StrategyOutput {
    let price_vista = first_candidate(page, STORE_VISTA_STEPS)
        .and_then(adjust_possible_cents)
        .or_else(|| first_candidate(page, STATE_VISTA_STEPS))
        .and_then(round_to_cents);

    StrategyOutput {
        title: None,
        price_vista,
        price_parcelado: first_candidate(page, PARCELADO_STEPS).and_then(adjust_possible_cents),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEXT_PAGE: &str = r#"<html><head><title>Pichau</title></head><body>
        <div id="__next"></div>
        <script id="__NEXT_DATA__" type="application/json">
        {"props":{"pageProps":{"product":{
            "price": 4299.99,
            "price_with_discount": 3654.99,
            "pixPrice": "1,00",
            "installments": [{"quantity": 12, "value": 35833}]
        }}}}
        </script></body></html>"#;

    #[test]
    fn test_state_fallbacks() {
        let out = extract(&Page::parse(NEXT_PAGE));
        assert_eq!(out.price_vista, Some(3654.99));
        assert_eq!(out.price_parcelado, Some(4299.96));
    }

    #[test]
    fn test_html_signals_win_over_state() {
        let html = NEXT_PAGE.replace(
            r#"<div id="__next"></div>"#,
            r#"<div id="__next"><span>à vista R$ 3.599,90</span> <span>12x de R$ 349,99</span></div>"#,
        );
        let out = extract(&Page::parse(&html));
        assert_eq!(out.price_vista, Some(3599.9));
        assert_eq!(out.price_parcelado, Some(4199.88));
    }
}
