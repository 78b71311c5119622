//! Request boundary shared by every front end
//!
//! Three operations, each taking already-decoded input and returning either a
//! response payload or an [`ApiError`] that renders to an [`ErrorResponse`]:
//!
//! - [`parse_schema`]: SQL dump to tables
//! - [`generate_sql`]: mapped rows to INSERT statements
//! - [`validate`]: mapped rows to a list of constraint violations

pub mod error;
pub mod types;

pub use error::{ApiError, ApiResult, ErrorKind};
pub use types::{
    ErrorResponse, GenerateRequest, GenerateResponse, ParseSchemaResponse, ValidateResponse,
};

use crate::config::ImporterConfig;
use crate::export::SQLExporter;
use crate::import::SQLImporter;
use crate::validation::{validate_rows, validate_table_name};

/// Parse an uploaded schema dump
pub fn parse_schema(sql: &str, config: &ImporterConfig) -> ApiResult<ParseSchemaResponse> {
    tracing::debug!(bytes = sql.len(), "Parsing schema upload");
    let import = SQLImporter::from_config(config).parse(sql)?;
    Ok(ParseSchemaResponse {
        tables: import.tables,
    })
}

/// Generate INSERT statements for a request
///
/// When `fields` are supplied and validation is enabled, any constraint
/// violation fails the request with every violation attached.
pub fn generate_sql(
    request: &GenerateRequest,
    config: &ImporterConfig,
) -> ApiResult<GenerateResponse> {
    if request.table.is_empty() {
        return Err(ApiError::MissingTableName);
    }
    if request.mapping.is_empty() {
        return Err(ApiError::MissingMapping);
    }
    if request.rows.is_empty() {
        return Err(ApiError::MissingData);
    }

    if let Err(e) = validate_table_name(&request.table) {
        tracing::warn!("Table name validation warning: {}", e);
    }

    tracing::info!(
        table = %request.table,
        rows = request.rows.len(),
        columns = request.mapping.len(),
        "Generating SQL"
    );

    if config.validate_before_generate && !request.fields.is_empty() {
        let errors = validate_rows(&request.rows, &request.fields);
        if !errors.is_empty() {
            return Err(ApiError::ValidationFailed(errors));
        }
    }

    let sql = SQLExporter::from_config(config)
        .export_insert(
            &request.table,
            &request.mapping,
            &request.fields,
            &request.rows,
        )
        .map_err(|e| {
            tracing::error!("SQL generation returned no statement: {}", e);
            ApiError::GenerationFailed
        })?;

    Ok(GenerateResponse { sql })
}

/// Validate rows against fields without generating SQL
pub fn validate(request: &GenerateRequest) -> ValidateResponse {
    let errors: Vec<String> = validate_rows(&request.rows, &request.fields)
        .iter()
        .map(ToString::to_string)
        .collect();
    ValidateResponse {
        valid: errors.is_empty(),
        errors,
    }
}
