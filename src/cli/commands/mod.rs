//! CLI command implementations

pub mod generate;
pub mod schema;
pub mod validate;

use std::io::Read;
use std::path::PathBuf;

use crate::api::{ApiError, GenerateRequest};
use crate::cli::error::CliError;
use crate::cli::output::format_error;

/// Load input content from file or stdin
pub(crate) fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Load and decode a JSON generation request
pub(crate) fn load_request(input: &str) -> Result<GenerateRequest, CliError> {
    let content = load_input(input)?;
    serde_json::from_str(&content).map_err(|e| report(ApiError::from(e)))
}

/// Print the error payload on stderr and hand the error back
pub(crate) fn report(err: ApiError) -> CliError {
    eprintln!("{}", format_error(&err));
    CliError::ApiError(err)
}
