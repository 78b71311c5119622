//! `generate` command

use std::path::PathBuf;

use crate::api::generate_sql;
use crate::cli::error::CliError;
use crate::config::ImporterConfig;

use super::{load_request, report};

/// Arguments for the `generate` command
pub struct GenerateArgs {
    /// Request JSON file, or `-` for stdin
    pub input: String,
    /// Write SQL here instead of stdout
    pub output: Option<PathBuf>,
    /// Override the configured table name
    pub table: Option<String>,
    pub verbose: bool,
}

/// Handle the `generate` command
pub fn handle_generate(args: &GenerateArgs, config: &ImporterConfig) -> Result<(), CliError> {
    let mut request = load_request(&args.input)?;
    if let Some(table) = &args.table {
        request.table = table.clone();
    }

    if args.verbose {
        eprintln!("Generating SQL...");
        eprintln!("  Table: {}", request.table);
        eprintln!("  Rows: {}", request.rows.len());
        eprintln!("  Mapped columns: {}", request.mapping.len());
        eprintln!("  Identifier quotes: {}", config.identifier_quote);
    }

    let response = generate_sql(&request, config).map_err(report)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &response.sql)
                .map_err(|e| CliError::FileWriteError(path.clone(), e.to_string()))?;
            if args.verbose {
                eprintln!("Wrote {} bytes to {}", response.sql.len(), path.display());
            }
        }
        None => println!("{}", response.sql),
    }

    Ok(())
}
