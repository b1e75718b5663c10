use serde::{Deserialize, Serialize};

/// An item requested for a landscaping plan
///
/// Every field is optional; missing fields take the estimator's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestedItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
}

impl RequestedItem {
    pub fn new(name: &str, category: &str, size: &str, quantity: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            size: Some(size.to_string()),
            quantity: Some(quantity),
        }
    }
}

/// Where a line's unit price came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceSource {
    /// Botanical-name pricing
    Species { botanical_name: String, size: String },
    /// Category table pricing
    Category {
        category: String,
        size: String,
        /// False when the category's first size was used
        size_matched: bool,
    },
    /// Species mode found nothing; configured fallback price used
    Fallback,
    /// No category matched
    Unmatched,
}

/// One priced entry in a budget breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub item: String,
    pub quantity: f64,
    pub unit_price: String,
    pub total_estimate: String,
    pub total_low: f64,
    pub total_high: f64,
    pub source: PriceSource,
    /// The unit price could not be parsed and was counted as zero
    pub unparseable: bool,
}

/// Budget totals with a line-item breakdown in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BudgetResult {
    pub total_low: f64,
    pub total_high: f64,
    pub breakdown: Vec<LineItem>,
}

impl BudgetResult {
    /// `$low - $high` for the whole budget
    pub fn total_estimate(&self) -> String {
        crate::pricing::format_usd_range(self.total_low, self.total_high)
    }

    /// Lines that priced at zero because nothing matched or parsed
    pub fn unpriced_lines(&self) -> impl Iterator<Item = &LineItem> {
        self.breakdown
            .iter()
            .filter(|line| line.unparseable || line.source == PriceSource::Unmatched)
    }
}

/// Handling of negative quantities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityPolicy {
    /// Multiply through unchanged, negatives included
    #[default]
    PassThrough,
    /// Treat negative quantities as zero
    ClampToZero,
}

impl QuantityPolicy {
    pub fn apply(&self, quantity: f64) -> f64 {
        match self {
            QuantityPolicy::PassThrough => quantity,
            QuantityPolicy::ClampToZero => quantity.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_item_from_empty_json() {
        let item: RequestedItem = serde_json::from_str("{}").unwrap();
        assert_eq!(item, RequestedItem::default());
    }

    #[test]
    fn test_requested_item_integer_quantity() {
        let item: RequestedItem =
            serde_json::from_str(r#"{"name": "Lavender", "quantity": 10}"#).unwrap();
        assert_eq!(item.quantity, Some(10.0));
        assert!(item.category.is_none());
    }

    #[test]
    fn test_quantity_policy() {
        assert_eq!(QuantityPolicy::PassThrough.apply(-3.0), -3.0);
        assert_eq!(QuantityPolicy::ClampToZero.apply(-3.0), 0.0);
        assert_eq!(QuantityPolicy::ClampToZero.apply(4.0), 4.0);
    }

    #[test]
    fn test_price_source_serialization() {
        let source = PriceSource::Category {
            category: "tree".to_string(),
            size: "15-gallon".to_string(),
            size_matched: true,
        };
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(json["kind"], "category");
        assert_eq!(json["category"], "tree");
    }
}
