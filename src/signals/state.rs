//! Search over server-rendered framework state (`__NEXT_DATA__`).
//!
//! The state blob has no stable schema, so it is walked as plain JSON and
//! matched by key name. Traversal uses an explicit stack so hostile nesting
//! depth cannot overflow the call stack.

use std::sync::LazyLock;

use scraper::Selector;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::{BROAD_MINOR_UNITS, STATE_FLOOR};
use crate::normalize::{demote_if_minor_units, parse_locale_number, round_to_cents};
use crate::parser::Page;

static NEXT_DATA: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script#__NEXT_DATA__").expect("next data selector is valid")
});

/// Key names (lowercase) that carry a cash or discounted price.
pub const CASH_PRICE_KEYS: &[&str] = &[
    "pix",
    "pixprice",
    "pix_price",
    "pricepix",
    "cash",
    "cashprice",
    "cash_price",
    "price_cash",
    "pricewithdiscount",
    "price_with_discount",
    "value_with_discount",
    "promotionalprice",
    "promotional_price",
    "price",
    "saleprice",
    "lowprice",
];

/// Decode the page's `__NEXT_DATA__` script, if present and valid JSON.
pub fn next_data(page: &Page) -> Option<Value> {
    let script = page.document().select(&NEXT_DATA).next()?;
    let text = script.text().collect::<String>();
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            debug!("undecodable __NEXT_DATA__: {}", e);
            None
        }
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_locale_number(s),
        _ => None,
    }
}

fn children(value: &Value) -> Box<dyn Iterator<Item = &Value> + '_> {
    match value {
        Value::Array(items) => Box::new(items.iter()),
        Value::Object(map) => Box::new(map.values()),
        _ => Box::new(std::iter::empty()),
    }
}

/// Every number (or numeric string) stored under one of `keys`, compared
/// case-insensitively, after the broad cents correction. Values of 0.05 or
/// less are dropped.
pub fn collect_prices(tree: &Value, keys: &[&str]) -> Vec<f64> {
    let mut found = Vec::new();
    let mut stack = vec![tree];

    while let Some(node) = stack.pop() {
        if let Value::Object(map) = node {
            for (key, value) in map {
                if keys.contains(&key.to_lowercase().as_str()) {
                    if let Some(n) = number_of(value).filter(|n| n.is_finite() && *n != 0.0) {
                        let n = demote_if_minor_units(n, BROAD_MINOR_UNITS);
                        if n > STATE_FLOOR {
                            found.extend(round_to_cents(n));
                        }
                    }
                }
            }
        }
        stack.extend(children(node).filter(|v| v.is_object() || v.is_array()));
    }
    found
}

fn get_ci<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}

// Integer prefix, the way installment counts are written ("10", "10x", 10.0).
fn quantity_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

/// Largest `quantity × value` (or `quantity × amount`) over every object in
/// the tree with more than one installment.
pub fn installment_total(tree: &Value) -> Option<f64> {
    let mut best: Option<f64> = None;
    let mut stack = vec![tree];

    while let Some(node) = stack.pop() {
        if let Value::Object(map) = node {
            let quantity = get_ci(map, "quantity").and_then(quantity_of);
            let each = get_ci(map, "value")
                .filter(|v| !v.is_null())
                .or_else(|| get_ci(map, "amount"))
                .and_then(number_of)
                .filter(|n| n.is_finite())
                .map(|n| demote_if_minor_units(n, BROAD_MINOR_UNITS));

            if let (Some(quantity), Some(each)) = (quantity, each) {
                if quantity > 1 && each > 0.0 {
                    if let Some(total) = round_to_cents(quantity as f64 * each) {
                        best = Some(best.map_or(total, |b: f64| b.max(total)));
                    }
                }
            }
        }
        stack.extend(children(node));
    }
    best
}

/// Cheapest cash-like price in the page's embedded state above R$ 1,00.
pub fn cheapest_cash_price(page: &Page) -> Option<f64> {
    let tree = next_data(page)?;
    collect_prices(&tree, CASH_PRICE_KEYS)
        .into_iter()
        .filter(|n| *n > 1.0)
        .min_by(f64::total_cmp)
}

/// Installment total from the page's embedded state.
pub fn state_installment_total(page: &Page) -> Option<f64> {
    installment_total(&next_data(page)?)
}
