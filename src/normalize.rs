//! Locale-aware number parsing and currency normalization for BRL prices.

use crate::config::{BROAD_MINOR_UNITS, MinorUnitBand, NARROW_MINOR_UNITS};

/// Parse a pt-BR formatted number (`1.234,56`, `R$ 99,90`) into a float.
///
/// Dots are thousands separators and are dropped, the comma becomes the
/// decimal point, and every other non-numeric character is discarded. The
/// longest numeric prefix of what remains is parsed.
pub fn parse_locale_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // Only the first decimal point counts; `1,2,3` reads as 1.2.
    let mut seen_point = false;
    let prefix: String = cleaned
        .chars()
        .take_while(|c| {
            if *c == '.' {
                if seen_point {
                    return false;
                }
                seen_point = true;
            }
            true
        })
        .collect();

    prefix.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Round to two decimals. `None` for non-finite input.
pub fn round_to_cents(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    Some((value * 100.0).round() / 100.0)
}

/// Divide by 100 when `value` is an integer inside `band`.
pub fn demote_if_minor_units(value: f64, band: MinorUnitBand) -> f64 {
    if value.fract() != 0.0 || !value.is_finite() {
        return value;
    }
    let above = if band.lower_inclusive {
        value >= band.lower
    } else {
        value > band.lower
    };
    let below = if band.upper_inclusive {
        value <= band.upper
    } else {
        value < band.upper
    };
    if !above || !below {
        return value;
    }
    if band.skip_hundreds && value % 100.0 == 0.0 {
        return value;
    }
    value / 100.0
}

/// Broad minor-units correction followed by rounding.
pub fn adjust_possible_cents(value: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    round_to_cents(demote_if_minor_units(value, BROAD_MINOR_UNITS))
}

/// Last-resort correction for display: small integers like `355` are read
/// as R$ 3,55, anything from 500 up is always whole reais.
pub fn sanitize_price(value: Option<f64>) -> Option<f64> {
    let v = value.filter(|v| v.is_finite())?;
    Some(demote_if_minor_units(v, NARROW_MINOR_UNITS))
}

/// Render a price as `R$ 1.234,56`. Missing values render as zero.
pub fn format_brl(value: Option<f64>) -> String {
    let Some(v) = sanitize_price(value).and_then(round_to_cents) else {
        return "R$ 0,00".to_string();
    };

    let cents = (v.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if v < 0.0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, cents % 100)
}
