//! Regex signals over the visible body text.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;
use tracing::debug;

use crate::config::{KEYWORD_WINDOW, PAYMENT_CONTEXT_WINDOW, SCAN_FLOOR};
use crate::normalize::{parse_locale_number, round_to_cents};
use crate::parser::Page;

static KEYWORD_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(à\s*vista|no\s*pix|boleto)[^\n]{{0,{}}}?R\$\s*([0-9.,]+)",
        KEYWORD_WINDOW
    ))
    .expect("keyword price regex is valid")
});

static PAYMENT_CONTEXT: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"(no\s*pix|pix)",
        r"(pix\s*com\s*\d{1,2}%\s*desconto)",
        r"(à\s*vista)",
    ]
    .map(|lead| {
        Regex::new(&format!(
            r"(?i){}[^\n]{{0,{}}}?R\$\s*([0-9.,]+)",
            lead, PAYMENT_CONTEXT_WINDOW
        ))
        .expect("payment context regex is valid")
    })
});

static INSTALLMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})\s*[xX]\s*(?:de)?\s*R\$\s*([0-9.,]+)").expect("installment regex is valid")
});

static BRL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"R\$\s*([0-9.]{1,3}(?:\.[0-9]{3})*(?:,[0-9]{2})|[0-9]+,[0-9]{2})")
        .expect("BRL literal regex is valid")
});

// Pix price as rendered by Mercado Livre, amount before or after the label.
static PIX_ANCHORED: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"(?i)R\$\s*([0-9]{1,2}(?:\.[0-9]{3})*(?:,[0-9]{2})?)[^0-9]*(?:no\s+Pix|Pix|pix)",
        r"(?i)([0-9]{1,2}(?:\.[0-9]{3})*)\s*(?:no\s+Pix|Pix|pix)",
        r"(?i)(?:no\s+Pix|Pix|pix)[^R]*R\$\s*([0-9]{1,2}(?:\.[0-9]{3})*(?:,[0-9]{2})?)",
    ]
    .map(|re| Regex::new(re).expect("pix regex is valid"))
});

static INTEREST_INSTALLMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:em|até)\s*(\d{1,2})x[^R]*R\$\s*([0-9.,]+)[^R]*(?:sem juros|juros)")
        .expect("interest installment regex is valid")
});

fn positive(text: &str) -> Option<f64> {
    parse_locale_number(text).filter(|v| *v > 0.0)
}

/// First `R$` amount within a short window after "à vista", "no pix" or
/// "boleto".
pub fn keyword_price(page: &Page) -> Option<f64> {
    let caps = KEYWORD_PRICE.captures(page.body_text())?;
    positive(&caps[2]).and_then(round_to_cents)
}

/// Cash price from payment phrasing, tried pattern by pattern: pix, then
/// "pix com N% desconto", then "à vista".
pub fn payment_context_price(page: &Page) -> Option<f64> {
    PAYMENT_CONTEXT.iter().find_map(|re| {
        let caps = re.captures(page.flat_text())?;
        positive(&caps[2]).and_then(round_to_cents)
    })
}

fn installment_from(re: &Regex, text: &str) -> Option<f64> {
    let caps = re.captures(text)?;
    let quantity: u32 = caps[1].parse().ok()?;
    let each = positive(&caps[2])?;
    (quantity > 1).then(|| f64::from(quantity) * each)
}

/// Full installment total from the first `N x R$ amount` on the page.
///
/// Only the first match counts; a `1x` plan yields nothing.
pub fn installment_total(page: &Page) -> Option<f64> {
    installment_from(&INSTALLMENT, page.body_text()).and_then(round_to_cents)
}

/// `em 10x R$ 199,90 sem juros` style installment total, unrounded.
pub fn interest_phrase_installments(page: &Page) -> Option<f64> {
    installment_from(&INTEREST_INSTALLMENT, page.body_text())
}

/// Every `R$` literal with cents in the body, rounded, deduplicated and
/// sorted ascending. Values of R$ 1,00 or less are dropped.
pub fn all_brl(page: &Page) -> Vec<f64> {
    let mut values: Vec<f64> = BRL_LITERAL
        .captures_iter(page.body_text())
        .filter_map(|caps| parse_locale_number(&caps[1]))
        .filter(|v| *v > SCAN_FLOOR)
        .filter_map(round_to_cents)
        .collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    debug!("currency scan found {} distinct literals", values.len());
    values
}

/// Highest currency literal, when the page shows at least two.
pub fn highest_literal(page: &Page) -> Option<f64> {
    let all = all_brl(page);
    if all.len() >= 2 { all.last().copied() } else { None }
}

/// Lowest currency literal on the page.
pub fn lowest_literal(page: &Page) -> Option<f64> {
    all_brl(page).first().copied()
}

/// Pix price next to its label, accepted only from `min` upward.
pub fn pix_anchored_price(page: &Page, min: f64) -> Option<f64> {
    PIX_ANCHORED.iter().find_map(|re| {
        let caps = re.captures(page.body_text())?;
        positive(&caps[1]).filter(|p| *p >= min)
    })
}

/// First rendered price fragment, trying `selectors` in order, that parses
/// to more than `min`.
pub fn rendered_price(page: &Page, selectors: &[Selector], min: f64) -> Option<f64> {
    selectors.iter().find_map(|sel| {
        let el = page.document().select(sel).next()?;
        let text = el.text().collect::<String>();
        positive(text.trim()).filter(|p| *p > min)
    })
}
