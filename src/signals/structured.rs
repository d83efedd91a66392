//! schema.org `Product` blocks embedded as JSON-LD.

use std::sync::LazyLock;

use scraper::Selector;
use serde_json::Value;
use tracing::debug;

use crate::normalize::parse_locale_number;
use crate::parser::Page;

static JSON_LD: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("ld+json selector is valid")
});

/// Offer fields tried for the cash price, in order.
pub const OFFER_PRICE_FIELDS: &[&str] = &["price", "lowPrice", "highPrice"];

/// First JSON-LD node typed as a product, either top-level (possibly inside
/// an array) or inside a `@graph` list. Blocks that fail to decode are skipped.
pub fn product_node(page: &Page) -> Option<Value> {
    for script in page.document().select(&JSON_LD) {
        let text = script.text().collect::<String>();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        let value = match serde_json::from_str::<Value>(text) {
            Ok(value) => value,
            Err(e) => {
                debug!("skipping undecodable JSON-LD block: {}", e);
                continue;
            }
        };
        if let Some(product) = find_product(&value) {
            return Some(product.clone());
        }
    }
    None
}

fn find_product(value: &Value) -> Option<&Value> {
    let nodes = match value {
        Value::Array(items) => items.iter().collect::<Vec<_>>(),
        other => vec![other],
    };
    for node in nodes {
        if node.get("@type").is_some_and(is_product_type) {
            return Some(node);
        }
        if let Some(graph) = node.get("@graph").and_then(|g| g.as_array()) {
            if let Some(product) = graph
                .iter()
                .find(|item| item.get("@type").is_some_and(is_product_type))
            {
                return Some(product);
            }
        }
    }
    None
}

fn is_product_type(ld_type: &Value) -> bool {
    match ld_type {
        Value::String(s) => s.to_lowercase().contains("product"),
        Value::Array(types) => types
            .iter()
            .filter_map(|t| t.as_str())
            .any(|t| t.to_lowercase().contains("product")),
        _ => false,
    }
}

/// The product's offer; the first one when `offers` is a list.
pub fn offer(product: &Value) -> Option<&Value> {
    match product.get("offers")? {
        Value::Array(offers) => offers.first(),
        Value::Null => None,
        offer => Some(offer),
    }
}

/// Parse the first populated field of the product's offer.
///
/// Selection stops at the first field that holds something; if that value
/// does not parse, the later fields are not consulted.
pub fn offer_price(product: &Value, fields: &[&str]) -> Option<f64> {
    let offer = offer(product)?;
    let value = fields
        .iter()
        .filter_map(|field| offer.get(*field))
        .find(|v| is_populated(v))?;
    price_value(value)
}

fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numbers are taken as-is; strings go through the pt-BR parser.
fn price_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_locale_number(s),
        _ => None,
    }?;
    (n.is_finite() && n > 0.0).then_some(n)
}

/// Cash price from structured data: `price`, then `lowPrice`, then `highPrice`.
pub fn product_price(page: &Page) -> Option<f64> {
    offer_price(&product_node(page)?, OFFER_PRICE_FIELDS)
}

/// Product name from structured data (`name`, else `title`).
pub fn product_name(page: &Page) -> Option<String> {
    let product = product_node(page)?;
    ["name", "title"]
        .iter()
        .filter_map(|key| product.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
