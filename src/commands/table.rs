use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use landscape_budget::config::Config;
use landscape_budget::pricing::{SizePrice, PriceRange};

/// Execute the table show command
///
/// Rows are printed in match order, which is the order the estimator scans.
pub fn show(cfg: &Config, species: bool) -> Result<()> {
    let rows: Vec<(String, Vec<SizePrice>)> = if species {
        cfg.pricing
            .load_species()?
            .species
            .into_iter()
            .map(|s| (s.botanical_name, s.sizes))
            .collect()
    } else {
        cfg.pricing
            .load_table()?
            .categories
            .into_iter()
            .map(|c| (c.name, c.sizes))
            .collect()
    };

    let title = if species { "Species Pricing" } else { "Category Pricing" };
    println!("{}", title.green().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new(if species { "SPECIES" } else { "CATEGORY" }).fg(Color::Cyan),
        Cell::new("SIZE").fg(Color::Cyan),
        Cell::new("PRICE").fg(Color::Cyan),
    ]);

    for (name, sizes) in &rows {
        for (idx, entry) in sizes.iter().enumerate() {
            let label = if idx == 0 { name.as_str() } else { "" };
            let price = if PriceRange::parse(&entry.price).is_unparseable() {
                Cell::new(&entry.price).fg(Color::Yellow)
            } else {
                Cell::new(&entry.price)
            };
            table.add_row(vec![Cell::new(label), Cell::new(&entry.size), price]);
        }
    }

    println!("{}", table);
    Ok(())
}
