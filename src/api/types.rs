//! Request and response payloads
//!
//! Field names are the JSON contract shared with upload front ends.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Field, Row, Table};

/// Tables recovered from an uploaded schema dump
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ParseSchemaResponse {
    pub tables: Vec<Table>,
}

/// Request to generate INSERT statements (also used for validation only)
///
/// `rows` carry cells in the order of `fields`; `mapping` maps source column
/// identifiers to target column names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct GenerateRequest {
    pub table: String,
    pub mapping: BTreeMap<String, String>,
    pub rows: Vec<Row>,
    pub fields: Vec<Field>,
}

impl GenerateRequest {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Map a source column onto a target column
    pub fn with_mapping(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.mapping.insert(source.into(), target.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }
}

/// Generated SQL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub sql: String,
}

/// Outcome of validating rows without generating SQL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ValidateResponse {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Error payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellValue;

    #[test]
    fn test_generate_request_from_json() {
        let json = r#"{
            "table": "users",
            "mapping": {"A": "id", "B": "name"},
            "rows": [[1, "Ada"], [2, null]],
            "fields": [{"name": "id", "type": "INT", "nullable": false}, {"name": "name", "type": "VARCHAR(50)"}]
        }"#;
        let request: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.table, "users");
        assert_eq!(request.mapping.len(), 2);
        assert_eq!(request.rows[1][1], CellValue::Null);
        assert!(!request.fields[0].nullable);
        assert!(request.fields[1].nullable);
    }

    #[test]
    fn test_missing_keys_default() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.table.is_empty());
        assert!(request.rows.is_empty());
    }

    #[test]
    fn test_error_response_omits_empty_fields() {
        let response = ErrorResponse {
            error: "Failed to generate SQL".to_string(),
            ..ErrorResponse::default()
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"Failed to generate SQL"}"#);
    }
}
