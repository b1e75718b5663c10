use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use landscape_budget::budget::{BudgetEstimator, BudgetResult, PriceSource, RequestedItem};
use landscape_budget::config::Config;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Execute the estimate command
///
/// Reads a JSON array of items from `file` (stdin when absent or "-").
pub fn execute(cfg: &Config, file: Option<&Path>, json: bool, species: bool) -> Result<()> {
    let content = read_input(file)?;
    let items: Vec<RequestedItem> =
        serde_json::from_str(&content).context("Items must be a JSON array of objects")?;
    info!("Estimating budget for {} items", items.len());

    let table = cfg.pricing.load_table()?;
    let mut estimator =
        BudgetEstimator::new(Arc::new(table)).with_options(cfg.estimate.clone());
    if species || cfg.pricing.use_species {
        estimator = estimator.with_species(Arc::new(cfg.pricing.load_species()?));
    }

    let result = estimator.estimate(&items);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_breakdown(&result);
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read items from {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read items from stdin")?;
            Ok(buffer)
        }
    }
}

fn display_breakdown(result: &BudgetResult) {
    println!("{}", "Budget Estimate".green().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ITEM").fg(Color::Cyan),
        Cell::new("QTY").fg(Color::Cyan),
        Cell::new("UNIT PRICE").fg(Color::Cyan),
        Cell::new("PRICED AS").fg(Color::Cyan),
        Cell::new("ESTIMATE").fg(Color::Cyan),
    ]);

    for line in &result.breakdown {
        let estimate = if line.unparseable || line.source == PriceSource::Unmatched {
            Cell::new(&line.total_estimate).fg(Color::Yellow)
        } else {
            Cell::new(&line.total_estimate)
        };

        table.add_row(vec![
            Cell::new(&line.item),
            Cell::new(format_quantity(line.quantity)),
            Cell::new(&line.unit_price),
            Cell::new(describe_source(&line.source)),
            estimate,
        ]);
    }

    println!("{}", table);
    println!();
    println!("  {}: {}", "Total".bold(), result.total_estimate());

    let unpriced = result.unpriced_lines().count();
    if unpriced > 0 {
        println!(
            "  {}",
            format!("{} item(s) could not be priced and count as $0", unpriced).yellow()
        );
    }
}

fn describe_source(source: &PriceSource) -> String {
    match source {
        PriceSource::Species {
            botanical_name,
            size,
        } => format!("{} / {}", botanical_name, size),
        PriceSource::Category {
            category,
            size,
            size_matched,
        } => {
            if *size_matched {
                format!("{} / {}", category, size)
            } else {
                format!("{} / {} (default size)", category, size)
            }
        }
        PriceSource::Fallback => "fallback".to_string(),
        PriceSource::Unmatched => "unmatched".to_string(),
    }
}

/// Whole quantities print without a decimal point
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(-3.0), "-3");
    }

    #[test]
    fn test_describe_source() {
        let source = PriceSource::Category {
            category: "tree".to_string(),
            size: "15-gallon".to_string(),
            size_matched: false,
        };
        assert_eq!(describe_source(&source), "tree / 15-gallon (default size)");
        assert_eq!(describe_source(&PriceSource::Unmatched), "unmatched");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, r#"[{"name": "Lavender"}]"#).unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), r#"[{"name": "Lavender"}]"#);
    }
}
