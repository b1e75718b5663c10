//! Market pricing summary text for a search term
//!
//! Used to ground plant and material recommendations with realistic prices.

use crate::pricing::table::{PriceCategory, PricingTable};

/// Returned when no category matches
pub const FALLBACK_CONTEXT: &str = "Standard Landscaping Estimates:\n- Plants (1-5 gal): $10-$50\n- Hardscape: $5-$30 per sq ft";

/// Build pricing reference lines for every category named by the term or a tag
pub fn pricing_context(search_term: &str, tags: &[String], table: &PricingTable) -> String {
    let term = search_term.to_lowercase();
    let tags: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();

    let lines: Vec<String> = table
        .categories
        .iter()
        .filter(|c| term.contains(&c.name) || tags.iter().any(|t| t.contains(&c.name)))
        .map(context_line)
        .collect();

    if lines.is_empty() {
        return FALLBACK_CONTEXT.to_string();
    }

    format!("Market Pricing Reference:\n{}", lines.join("\n"))
}

fn context_line(category: &PriceCategory) -> String {
    let prices = category
        .sizes
        .iter()
        .map(|s| format!("{}: {}", s.size, s.price))
        .collect::<Vec<_>>()
        .join(", ");
    format!("- **{}**: {}", title_case(&category.name), prices)
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
