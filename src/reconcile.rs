use crate::config::VISTA_DISCOUNT;
use crate::models::{ExtractionResult, Inference, Source, Strategy, StrategyOutput};
use crate::normalize::round_to_cents;

fn present(price: Option<f64>) -> Option<f64> {
    price.filter(|p| p.is_finite() && *p != 0.0)
}

/// Merge a strategy's output into the final result.
///
/// When exactly one price is known the other is derived from it: the cash
/// price as 95% of the installment total, or the installment total as the
/// cash price. Two absent prices stay absent.
pub fn reconcile(
    url: &str,
    hostname: &str,
    strategy: Strategy,
    output: StrategyOutput,
    page_title: Option<String>,
) -> ExtractionResult {
    let title = output
        .title
        .filter(|t| !t.is_empty())
        .or(page_title)
        .filter(|t| !t.is_empty());

    let mut price_vista = present(output.price_vista);
    let mut price_parcelado = present(output.price_parcelado);

    let inferred = match (price_vista, price_parcelado) {
        (None, Some(parcelado)) => {
            price_vista = round_to_cents(parcelado * VISTA_DISCOUNT);
            Some(Inference::VistaFromParcelado)
        }
        (Some(vista), None) => {
            price_parcelado = Some(vista);
            Some(Inference::ParceladoEqualsVista)
        }
        _ => None,
    };

    ExtractionResult {
        url: url.to_string(),
        title,
        price_vista,
        price_parcelado,
        source: Source {
            hostname: hostname.to_string(),
            strategy,
            inferred,
        },
    }
}
