use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use db_importer_sdk::cli::commands::generate::{GenerateArgs, handle_generate};
use db_importer_sdk::cli::commands::schema::handle_parse_schema;
use db_importer_sdk::cli::commands::validate::handle_validate;
use db_importer_sdk::config::{IdentifierQuote, ImporterConfig};

#[derive(Parser)]
#[command(name = "db-importer")]
#[command(author, version, about = "Generate SQL INSERT statements from schema dumps and tabular data")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract table definitions from a SQL dump
    ParseSchema {
        /// SQL file, or - for stdin
        input: String,
    },
    /// Generate INSERT statements from a JSON request
    Generate {
        /// Request JSON file ({table, mapping, rows, fields}), or - for stdin
        input: String,

        /// Output path for the SQL (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target table name, overriding the request
        #[arg(short, long)]
        table: Option<String>,

        /// Identifier quoting style (backtick, double, bracket)
        #[arg(long)]
        quote: Option<String>,
    },
    /// Check rows against field constraints without generating SQL
    Validate {
        /// Request JSON file, or - for stdin
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ImporterConfig::load(path)?,
        None => ImporterConfig::default(),
    };

    match cli.command {
        Commands::ParseSchema { input } => {
            handle_parse_schema(&input, &config, cli.verbose)?;
        }
        Commands::Generate {
            input,
            output,
            table,
            quote,
        } => {
            if let Some(quote) = quote {
                let quote: IdentifierQuote = quote.parse().map_err(anyhow::Error::msg)?;
                config = config.with_identifier_quote(quote);
            }
            let args = GenerateArgs {
                input,
                output,
                table,
                verbose: cli.verbose,
            };
            handle_generate(&args, &config)?;
        }
        Commands::Validate { input } => {
            handle_validate(&input)?;
        }
    }

    Ok(())
}
