use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use landscape_budget::{config, init_tracing};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Load configuration before tracing so the configured level applies
    let cfg = config::load_config(&args.config)?;
    init_tracing(&cfg.logging.level, &cfg.logging.format);

    match args.command {
        cli::Commands::Estimate {
            file,
            json,
            species,
        } => {
            commands::estimate::execute(&cfg, file.as_deref(), json, species)?;
        }
        cli::Commands::Context { term, tags } => {
            commands::context::execute(&cfg, &term, &tags)?;
        }
        cli::Commands::Table { action } => match action {
            cli::TableCommands::Show { species } => commands::table::show(&cfg, species)?,
        },
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg)?,
        },
        cli::Commands::Version => {
            println!("Landscape Budget v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
