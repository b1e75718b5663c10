use crate::budget::models::{BudgetResult, LineItem, PriceSource, QuantityPolicy, RequestedItem};
use crate::pricing::price_range::{format_usd_range, PriceRange};
use crate::pricing::species::SpeciesTable;
use crate::pricing::table::{PricingTable, Resolution, UNMATCHED_PRICE};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Defaults and policies applied while pricing items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateOptions {
    pub default_name: String,
    pub default_category: String,
    pub default_size: String,
    pub default_quantity: f64,
    pub quantity_policy: QuantityPolicy,
    /// Unit price when species pricing is on and neither table matches
    pub species_fallback_price: String,
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self {
            default_name: "Unknown Item".to_string(),
            default_category: "plant".to_string(),
            default_size: "1-gallon".to_string(),
            default_quantity: 1.0,
            quantity_policy: QuantityPolicy::PassThrough,
            species_fallback_price: "$15 - $30".to_string(),
        }
    }
}

/// Prices requested items against a pricing table
///
/// Estimation never fails: unmatched items and unparseable prices become
/// zero-priced lines and the remaining lines are still totalled.
#[derive(Debug, Clone)]
pub struct BudgetEstimator {
    table: Arc<PricingTable>,
    species: Option<Arc<SpeciesTable>>,
    options: EstimateOptions,
}

impl BudgetEstimator {
    pub fn new(table: Arc<PricingTable>) -> Self {
        Self {
            table,
            species: None,
            options: EstimateOptions::default(),
        }
    }

    /// Try botanical-name pricing before the category table
    pub fn with_species(mut self, species: Arc<SpeciesTable>) -> Self {
        self.species = Some(species);
        self
    }

    pub fn with_options(mut self, options: EstimateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    pub fn options(&self) -> &EstimateOptions {
        &self.options
    }

    /// Price every item in input order and total the results
    pub fn estimate(&self, items: &[RequestedItem]) -> BudgetResult {
        let mut result = BudgetResult::default();

        for item in items {
            let line = self.price_line(item);
            result.total_low += line.total_low;
            result.total_high += line.total_high;
            result.breakdown.push(line);
        }

        debug!(
            "Estimated {} items: {}",
            result.breakdown.len(),
            result.total_estimate()
        );
        result
    }

    fn price_line(&self, item: &RequestedItem) -> LineItem {
        let options = &self.options;
        let name = item.name.as_deref().unwrap_or(&options.default_name);
        let category = item.category.as_deref().unwrap_or(&options.default_category);
        let size = item.size.as_deref().unwrap_or(&options.default_size);
        let quantity = options
            .quantity_policy
            .apply(item.quantity.unwrap_or(options.default_quantity));

        let (unit_price, source) = self.resolve(name, category, size);
        let parsed = PriceRange::parse(&unit_price);
        let (low, high) = parsed.bounds();

        if source == PriceSource::Unmatched {
            warn!("No price for '{}' (category '{}'), counting as zero", name, category);
        } else if parsed.is_unparseable() {
            warn!("Unparseable unit price '{}' for '{}', counting as zero", unit_price, name);
        }

        let total_low = low * quantity;
        let total_high = high * quantity;
        debug!(
            "{} x {} at {} -> {}",
            quantity,
            name,
            unit_price,
            format_usd_range(total_low, total_high)
        );

        LineItem {
            item: name.to_string(),
            quantity,
            total_estimate: format_usd_range(total_low, total_high),
            unit_price,
            total_low,
            total_high,
            source,
            unparseable: parsed.is_unparseable(),
        }
    }

    fn resolve(&self, name: &str, category: &str, size: &str) -> (String, PriceSource) {
        if let Some(species) = &self.species {
            if let Some(hit) = species.lookup(name, size) {
                return (
                    hit.price.to_string(),
                    PriceSource::Species {
                        botanical_name: hit.botanical_name.to_string(),
                        size: hit.size.to_string(),
                    },
                );
            }
        }

        match self.table.resolve(name, category, size) {
            Resolution::Matched {
                category,
                size,
                size_matched,
                price,
            } => (
                price.to_string(),
                PriceSource::Category {
                    category: category.to_string(),
                    size: size.to_string(),
                    size_matched,
                },
            ),
            Resolution::Unmatched if self.species.is_some() => {
                (self.options.species_fallback_price.clone(), PriceSource::Fallback)
            }
            Resolution::Unmatched => (UNMATCHED_PRICE.to_string(), PriceSource::Unmatched),
        }
    }
}

/// Estimate a budget with default options
pub fn calculate_budget(items: &[RequestedItem], table: &PricingTable) -> BudgetResult {
    BudgetEstimator::new(Arc::new(table.clone())).estimate(items)
}
