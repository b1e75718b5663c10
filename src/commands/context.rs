use anyhow::Result;
use landscape_budget::config::Config;
use landscape_budget::pricing::pricing_context;
use tracing::info;

/// Execute the context command
pub fn execute(cfg: &Config, term: &str, tags: &[String]) -> Result<()> {
    info!("Building pricing context for '{}'", term);

    let table = cfg.pricing.load_table()?;
    println!("{}", pricing_context(term, tags, &table));

    Ok(())
}
