//! `validate` command implementation

use crate::api::validate;
use crate::cli::error::CliError;
use crate::cli::output::to_json;

use super::load_request;

/// Handle the `validate` command
///
/// Prints the validation report and fails when any row violates a constraint.
pub fn handle_validate(input: &str) -> Result<(), CliError> {
    let request = load_request(input)?;
    let response = validate(&request);

    println!("{}", to_json(&response));

    if response.valid {
        Ok(())
    } else {
        Err(CliError::InvalidData(response.errors.len()))
    }
}
