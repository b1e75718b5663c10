use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "landscape-budget", version, about = "Landscaping budget estimator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "budget.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate a budget from a JSON array of items
    Estimate {
        /// Items file; reads stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Price by botanical name before falling back to categories
        #[arg(long)]
        species: bool,
    },

    /// Show market pricing for a search term and tags
    Context {
        /// Search term, e.g. "japanese maple tree"
        term: String,

        /// Extra tags to match against categories
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Pricing table inspection
    Table {
        #[command(subcommand)]
        action: TableCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TableCommands {
    /// Display the active pricing table in match order
    Show {
        /// Show the botanical-name table instead
        #[arg(long)]
        species: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration and pricing tables
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_estimate() {
        let args = vec!["landscape-budget", "estimate", "items.json", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Estimate {
                file,
                json,
                species,
            } => {
                assert_eq!(file, Some(PathBuf::from("items.json")));
                assert!(json);
                assert!(!species);
            }
            _ => panic!("Expected Estimate command"),
        }
        assert_eq!(cli.config, PathBuf::from("budget.toml"));
    }

    #[test]
    fn test_cli_parsing_context_with_tags() {
        let args = vec![
            "landscape-budget",
            "context",
            "zen garden",
            "--tag",
            "gravel",
            "-t",
            "bamboo",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Context { term, tags } => {
                assert_eq!(term, "zen garden");
                assert_eq!(tags, vec!["gravel", "bamboo"]);
            }
            _ => panic!("Expected Context command"),
        }
    }

    #[test]
    fn test_cli_parsing_global_config() {
        let args = vec!["landscape-budget", "config", "validate", "--config", "alt.toml"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigCommands::Validate
            }
        ));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(vec!["landscape-budget"]).is_err());
    }
}
