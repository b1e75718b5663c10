//! Nursery pricing keyed by botanical name
//!
//! Unlike the category table, species lookup prefers the most specific
//! entry: `"Acer palmatum 'Bloodgood'"` beats `"Acer palmatum"` for a
//! Bloodgood maple regardless of table order.

use crate::error::{AppError, Result};
use crate::pricing::table::SizePrice;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Prices for one botanical name, sizes in table order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesPrice {
    pub botanical_name: String,
    pub sizes: Vec<SizePrice>,
}

/// Ordered species pricing table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesTable {
    pub species: Vec<SpeciesPrice>,
}

/// A species lookup hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesMatch<'a> {
    pub botanical_name: &'a str,
    pub size: &'a str,
    pub price: &'a str,
}

impl SpeciesTable {
    pub fn from_entries(entries: &[(&str, &[(&str, &str)])]) -> Self {
        let species = entries
            .iter()
            .map(|(name, sizes)| SpeciesPrice {
                botanical_name: name.to_string(),
                sizes: sizes
                    .iter()
                    .map(|(size, price)| SizePrice {
                        size: size.to_string(),
                        price: price.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { species }
    }

    /// Parse a TOML species table (`[[species]]` with `sizes` arrays)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: SpeciesTable = toml::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading species pricing from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        info!("Loaded {} species prices", table.species.len());
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        for entry in &self.species {
            if entry.botanical_name.trim().is_empty() {
                return Err(AppError::PricingTable(
                    "botanical name cannot be empty".to_string(),
                ));
            }
            if entry.sizes.is_empty() {
                return Err(AppError::PricingTable(format!(
                    "species '{}' has no sizes",
                    entry.botanical_name
                )));
            }
        }
        Ok(())
    }

    /// Find the species named in `name` and its price for `size`
    pub fn lookup(&self, name: &str, size: &str) -> Option<SpeciesMatch<'_>> {
        let name = name.to_lowercase();
        let size = size.to_lowercase();

        let mut best: Option<&SpeciesPrice> = None;
        for entry in &self.species {
            let key = entry.botanical_name.to_lowercase();
            if key.is_empty() || !name.contains(&key) {
                continue;
            }
            // Strictly longer only, so earlier entries win ties
            if best.map_or(true, |b| key.len() > b.botanical_name.len()) {
                best = Some(entry);
            }
        }

        let entry = best?;
        let sized = entry
            .sizes
            .iter()
            .find(|s| size.contains(&s.size.to_lowercase()))
            .or_else(|| entry.sizes.first())?;

        Some(SpeciesMatch {
            botanical_name: &entry.botanical_name,
            size: &sized.size,
            price: &sized.price,
        })
    }
}
