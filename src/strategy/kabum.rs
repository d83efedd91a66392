use crate::models::StrategyOutput;
use crate::normalize::adjust_possible_cents;
use crate::parser::Page;
use crate::signals::text;

use super::{STORE_VISTA_STEPS, Step, first_candidate};

const PARCELADO_STEPS: &[Step] = &[
    ("installments", text::installment_total),
    ("highest_literal", text::highest_literal),
];

pub fn extract(page: &Page) -> StrategyOutput {
    StrategyOutput {
        title: None,
        price_vista: first_candidate(page, STORE_VISTA_STEPS).and_then(adjust_possible_cents),
        price_parcelado: first_candidate(page, PARCELADO_STEPS).and_then(adjust_possible_cents),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_price_and_installments() {
        let page = Page::parse(
            r#"<html><head>
            <script type="application/ld+json">
            {"@context":"https://schema.org","@type":"Product","name":"Processador",
             "offers":{"@type":"Offer","price":"899.99","priceCurrency":"BRL"}}
            </script></head>
            <body><b>R$ 899,99</b> à vista <p>ou 10x de R$ 105,87 sem juros</p></body></html>"#,
        );
        let out = extract(&page);
        // "899.99" reads as 89999 minor units.
        assert_eq!(out.price_vista, Some(899.99));
        assert_eq!(out.price_parcelado, Some(1058.7));
        assert_eq!(out.title, None);
    }

    #[test]
    fn test_text_fallbacks() {
        let page = Page::parse(
            r#"<html><body>
            <div>Preço no boleto: R$ 1.249,90</div>
            <div>R$ 1.469,29 em até 10x</div>
            </body></html>"#,
        );
        let out = extract(&page);
        assert_eq!(out.price_vista, Some(1249.9));
        assert_eq!(out.price_parcelado, Some(1469.29));
    }

    #[test]
    fn test_pix_context_price() {
        let page = Page::parse(
            "<html><body><span>no PIX com 15% de desconto</span> <span>R$ 2.099,90</span></body></html>",
        );
        let out = extract(&page);
        assert_eq!(out.price_vista, Some(2099.9));
        assert_eq!(out.price_parcelado, None);
    }
}
