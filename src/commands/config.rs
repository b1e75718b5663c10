use anyhow::Result;
use colored::Colorize;
use landscape_budget::config::Config;
use tracing::info;

/// Execute the config show command
pub fn show(cfg: &Config) -> Result<()> {
    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// The configuration was already validated when loaded; this also loads
/// both pricing tables so their structure is checked.
pub fn validate(cfg: &Config) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration and pricing tables");

    let table = cfg.pricing.load_table()?;
    let species = cfg.pricing.load_species()?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!(
        "  Pricing Table: {} ({} categories, {} sizes)",
        describe_source(cfg.pricing.table_path.as_deref()),
        table.categories.len(),
        table.size_count()
    );
    println!(
        "  Species Table: {} ({} species, {})",
        describe_source(cfg.pricing.species_path.as_deref()),
        species.species.len(),
        if cfg.pricing.use_species {
            "enabled".green()
        } else {
            "disabled".red()
        }
    );
    println!(
        "  Defaults: {} / {} / {} x{}",
        cfg.estimate.default_name,
        cfg.estimate.default_category,
        cfg.estimate.default_size,
        cfg.estimate.default_quantity
    );
    println!("  Quantity Policy: {:?}", cfg.estimate.quantity_policy);

    info!("Configuration validation successful");
    Ok(())
}

fn describe_source(path: Option<&std::path::Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    }
}
