//! Output formatting for CLI

use serde::Serialize;

use crate::api::{ApiError, ErrorResponse};
use crate::import::SchemaImport;

/// Human-readable summary of an import, one line per table
pub fn format_schema_summary(import: &SchemaImport) -> String {
    let mut output = format!(
        "Parsed {} table(s) with the {} strategy:\n",
        import.tables.len(),
        import.strategy
    );

    for table in &import.tables {
        let columns: Vec<String> = table
            .fields
            .iter()
            .map(|f| {
                if f.nullable {
                    format!("{}:{}", f.name, f.data_type)
                } else {
                    format!("{}:{}!", f.name, f.data_type)
                }
            })
            .collect();
        output.push_str(&format!("  {} ({})\n", table.name, columns.join(", ")));
    }

    output
}

/// Pretty JSON, falling back to compact output if pretty printing fails
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .or_else(|_| serde_json::to_string(value))
        .unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}

/// Error payload for stderr
pub fn format_error(err: &ApiError) -> String {
    let response: ErrorResponse = err.to_response();
    to_json(&response)
}
