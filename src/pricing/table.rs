//! Ordered pricing table and the category/size matcher
//!
//! Matching is first-match-in-table-order by substring containment, so the
//! order of categories and sizes is part of the table's meaning. Both levels
//! are stored as `Vec`s rather than maps to keep that order explicit.

use crate::error::{AppError, Result};
use crate::pricing::price_range::PriceRange;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Unit price used when no category matches
pub const UNMATCHED_PRICE: &str = "$0 - $0";

/// One size descriptor and its price-range literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePrice {
    pub size: String,
    pub price: String,
}

/// A pricing category with its sizes in table order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCategory {
    pub name: String,
    pub sizes: Vec<SizePrice>,
}

/// Process-wide pricing table, read-only once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTable {
    pub categories: Vec<PriceCategory>,
}

/// How a unit price was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched {
        category: &'a str,
        size: &'a str,
        /// False when the first size was used as the fallback
        size_matched: bool,
        price: &'a str,
    },
    Unmatched,
}

impl<'a> Resolution<'a> {
    /// The unit price string, `"$0 - $0"` when unmatched
    pub fn price(&self) -> &'a str {
        match self {
            Resolution::Matched { price, .. } => price,
            Resolution::Unmatched => UNMATCHED_PRICE,
        }
    }
}

impl PricingTable {
    /// Build a table from `(category, [(size, price)])` literals
    pub fn from_entries(entries: &[(&str, &[(&str, &str)])]) -> Self {
        let categories = entries
            .iter()
            .map(|(name, sizes)| PriceCategory {
                name: name.to_string(),
                sizes: sizes
                    .iter()
                    .map(|(size, price)| SizePrice {
                        size: size.to_string(),
                        price: price.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// Parse a TOML table (`[[categories]]` with `sizes` arrays) and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut table: PricingTable = toml::from_str(content)?;
        table.normalize();
        table.validate()?;
        Ok(table)
    }

    /// Load a pricing table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading pricing table from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        info!(
            "Loaded {} pricing categories ({} sizes)",
            table.categories.len(),
            table.size_count()
        );
        Ok(table)
    }

    fn normalize(&mut self) {
        for category in &mut self.categories {
            category.name = category.name.trim().to_lowercase();
            for entry in &mut category.sizes {
                entry.size = entry.size.trim().to_lowercase();
            }
        }
    }

    /// Check structural invariants
    ///
    /// Unparseable prices are allowed (they price at zero) but are logged.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(AppError::PricingTable(
                "table must contain at least one category".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.name.is_empty() {
                return Err(AppError::PricingTable(
                    "category name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(AppError::PricingTable(format!(
                    "duplicate category '{}'",
                    category.name
                )));
            }
            if category.sizes.is_empty() {
                return Err(AppError::PricingTable(format!(
                    "category '{}' has no sizes",
                    category.name
                )));
            }
            for entry in &category.sizes {
                if PriceRange::parse(&entry.price).is_unparseable() {
                    warn!(
                        "Unparseable price '{}' for {}/{} will be priced at zero",
                        entry.price, category.name, entry.size
                    );
                }
            }
        }

        Ok(())
    }

    pub fn size_count(&self) -> usize {
        self.categories.iter().map(|c| c.sizes.len()).sum()
    }

    /// First category whose key occurs in `category` or `name` (both lower-cased)
    pub fn match_category(&self, name: &str, category: &str) -> Option<&PriceCategory> {
        let category = category.to_lowercase();
        let name = name.to_lowercase();

        self.categories
            .iter()
            .find(|c| category.contains(&c.name) || name.contains(&c.name))
    }

    /// Resolve the unit price for an item
    pub fn resolve(&self, name: &str, category: &str, size: &str) -> Resolution<'_> {
        let Some(found) = self.match_category(name, category) else {
            debug!("No pricing category for '{}' ({})", name, category);
            return Resolution::Unmatched;
        };

        let size_lower = size.to_lowercase();
        let (entry, size_matched) = match found
            .sizes
            .iter()
            .find(|entry| size_lower.contains(&entry.size))
        {
            Some(entry) => (entry, true),
            None => match found.sizes.first() {
                Some(entry) => (entry, false),
                // Only reachable for hand-built tables that skipped validate()
                None => return Resolution::Unmatched,
            },
        };

        Resolution::Matched {
            category: &found.name,
            size: &entry.size,
            size_matched,
            price: &entry.price,
        }
    }
}

/// Resolve an item's unit price string against `table`
pub fn resolve_unit_price<'a>(
    name: &str,
    category: &str,
    size: &str,
    table: &'a PricingTable,
) -> &'a str {
    table.resolve(name, category, size).price()
}
