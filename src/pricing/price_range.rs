//! Price-range parsing and dollar formatting
//!
//! Pricing entries are free text written by people, e.g. `"$80 - $150"`,
//! `"$800+"` or `"$1,200"`. Parsing never fails: anything that cannot be
//! read as a range or a single value yields [`ParsedPrice::Unparseable`],
//! which contributes `(0.0, 0.0)` to a budget.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Result of reading a price-range string
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedPrice {
    /// `"$A - $B"`
    Range { low: f64, high: f64 },
    /// `"$A"` or `"$A+"`
    Single { value: f64 },
    /// Anything else
    Unparseable,
}

impl ParsedPrice {
    /// Low/high bounds, zero for unparseable input
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            ParsedPrice::Range { low, high } => (low, high),
            ParsedPrice::Single { value } => (value, value),
            ParsedPrice::Unparseable => (0.0, 0.0),
        }
    }

    pub fn is_unparseable(&self) -> bool {
        matches!(self, ParsedPrice::Unparseable)
    }
}

/// Namespace for the price-range grammar
pub struct PriceRange;

impl PriceRange {
    /// Parse a price description into a tagged value
    pub fn parse(text: &str) -> ParsedPrice {
        let cleaned = text.replace(['$', ','], "");
        let parts: Vec<&str> = cleaned.split('-').collect();

        match parts.as_slice() {
            [low, high] => match (low.trim().parse::<f64>(), high.trim().parse::<f64>()) {
                (Ok(low), Ok(high)) => ParsedPrice::Range { low, high },
                _ => ParsedPrice::Unparseable,
            },
            [single] => {
                let digits = non_numeric().replace_all(single, "");
                match digits.parse::<f64>() {
                    Ok(value) => ParsedPrice::Single { value },
                    Err(_) => ParsedPrice::Unparseable,
                }
            }
            // More than one hyphen: a range embedded in a longer note
            _ => ParsedPrice::Unparseable,
        }
    }
}

/// Parse a price-range string into `(low, high)`, `(0.0, 0.0)` on failure
pub fn parse_price_range(text: &str) -> (f64, f64) {
    PriceRange::parse(text).bounds()
}

fn non_numeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"))
}

/// Format a dollar amount as `$1,234.56`
///
/// Negative amounts render as `-$1,234.56`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.001 rounds to "0.00" and should not carry a sign
    let negative = amount < 0.0 && fixed != "0.00";
    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Format a low/high pair as `$X.XX - $Y.YY`
pub fn format_usd_range(low: f64, high: f64) -> String {
    format!("{} - {}", format_usd(low), format_usd(high))
}
