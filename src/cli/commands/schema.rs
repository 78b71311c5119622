//! `parse-schema` command

use crate::api::{ApiError, ParseSchemaResponse};
use crate::cli::error::CliError;
use crate::cli::output::{format_schema_summary, to_json};
use crate::config::ImporterConfig;
use crate::import::SQLImporter;

use super::{load_input, report};

/// Handle the `parse-schema` command
pub fn handle_parse_schema(
    input: &str,
    config: &ImporterConfig,
    verbose: bool,
) -> Result<(), CliError> {
    let content = load_input(input)?;

    if verbose {
        eprintln!("Parsing schema...");
        eprintln!("  Input: {} ({} bytes)", input, content.len());
        eprintln!("  Grammar dialect: {}", config.dialect);
    }

    let import = SQLImporter::from_config(config)
        .parse(&content)
        .map_err(|e| report(ApiError::from(e)))?;

    if verbose {
        eprint!("{}", format_schema_summary(&import));
    }

    println!(
        "{}",
        to_json(&ParseSchemaResponse {
            tables: import.tables,
        })
    );
    Ok(())
}
