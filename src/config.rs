use crate::budget::EstimateOptions;
use crate::error::{AppError, Result};
use crate::pricing::price_range::PriceRange;
use crate::pricing::reference::{reference_species, reference_table};
use crate::pricing::species::SpeciesTable;
use crate::pricing::table::PricingTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub pricing: PricingConfig,
    pub estimate: EstimateOptions,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Category pricing table; the built-in reference table when unset
    pub table_path: Option<PathBuf>,
    /// Botanical-name pricing; the built-in reference species when unset
    pub species_path: Option<PathBuf>,
    pub use_species: bool,
}

impl PricingConfig {
    pub fn load_table(&self) -> Result<PricingTable> {
        match &self.table_path {
            Some(path) => PricingTable::load(path),
            None => Ok(reference_table()),
        }
    }

    pub fn load_species(&self) -> Result<SpeciesTable> {
        match &self.species_path {
            Some(path) => SpeciesTable::load(path),
            None => Ok(reference_species()),
        }
    }
}

/// Load configuration from an optional file, then `LANDSCAPE_BUDGET__*` env vars
pub fn load_config(path: &Path) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("LANDSCAPE_BUDGET").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<()> {
    let level = cfg.logging.level.to_lowercase();
    if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
        return Err(AppError::Config(format!(
            "Invalid log level: {}",
            cfg.logging.level
        )));
    }

    if cfg.logging.format != "text" && cfg.logging.format != "json" {
        return Err(AppError::Config(format!(
            "Invalid log format '{}', expected 'text' or 'json'",
            cfg.logging.format
        )));
    }

    let estimate = &cfg.estimate;
    for (key, value) in [
        ("default_name", &estimate.default_name),
        ("default_category", &estimate.default_category),
        ("default_size", &estimate.default_size),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Config(format!("estimate.{} cannot be empty", key)));
        }
    }

    if !(estimate.default_quantity > 0.0) {
        return Err(AppError::Config(format!(
            "estimate.default_quantity must be positive, got {}",
            estimate.default_quantity
        )));
    }

    let (low, high) = PriceRange::parse(&estimate.species_fallback_price).bounds();
    if high <= 0.0 || low > high {
        return Err(AppError::Config(format!(
            "estimate.species_fallback_price '{}' is not a valid price range",
            estimate.species_fallback_price
        )));
    }

    Ok(())
}
