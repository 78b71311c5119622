//! SQL exporter for generating INSERT statements from mapped rows.
//!
//! # Security
//!
//! Table and column names are wrapped in the configured identifier quotes
//! after any embedded delimiter characters are stripped, and every value goes
//! through [`format_value`], so no input text reaches the output unescaped.

use std::collections::BTreeMap;

use super::literal::format_value;
use super::{ExportError, ExportResult};
use crate::config::{IdentifierQuote, ImporterConfig};
use crate::models::{CellValue, Field, Row, SqlType};

/// Declared type assumed for cells beyond the resolved column list
const UNTYPED_COLUMN: &str = "varchar";

/// Exporter for SQL INSERT statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct SQLExporter {
    pub identifier_quote: IdentifierQuote,
}

impl SQLExporter {
    pub fn new(identifier_quote: IdentifierQuote) -> Self {
        Self { identifier_quote }
    }

    pub fn from_config(config: &ImporterConfig) -> Self {
        Self::new(config.identifier_quote)
    }

    /// Quote an identifier, removing any delimiter characters it already contains
    ///
    /// # Example
    ///
    /// ```rust
    /// use db_importer_sdk::config::IdentifierQuote;
    /// use db_importer_sdk::export::sql::SQLExporter;
    ///
    /// assert_eq!(SQLExporter::quote_identifier("users", IdentifierQuote::Backtick), "`users`");
    /// assert_eq!(SQLExporter::quote_identifier("`users`", IdentifierQuote::Backtick), "`users`");
    /// assert_eq!(SQLExporter::quote_identifier("users", IdentifierQuote::Bracket), "[users]");
    /// ```
    pub fn quote_identifier(identifier: &str, quote: IdentifierQuote) -> String {
        let (open, close) = quote.delimiters();
        let stripped: String = identifier
            .chars()
            .filter(|c| *c != open && *c != close)
            .collect();
        format!("{}{}{}", open, stripped, close)
    }

    /// Fields that some mapping entry targets, in field order
    ///
    /// Mapping entries with an empty target are ignored.
    pub fn resolve_columns<'a>(
        fields: &'a [Field],
        mapping: &BTreeMap<String, String>,
    ) -> Vec<&'a Field> {
        fields
            .iter()
            .filter(|field| {
                mapping
                    .values()
                    .any(|target| !target.is_empty() && *target == field.name)
            })
            .collect()
    }

    /// Build a multi-row INSERT statement
    ///
    /// Fails when there are no rows or no field is targeted by the mapping.
    /// Cells are formatted positionally against the resolved columns; rows
    /// shorter than the column list are padded with `NULL` and surplus cells
    /// are formatted as untyped text.
    pub fn export_insert(
        &self,
        table: &str,
        mapping: &BTreeMap<String, String>,
        fields: &[Field],
        rows: &[Row],
    ) -> ExportResult<String> {
        if rows.is_empty() {
            return Err(ExportError::NoRows);
        }

        let columns = Self::resolve_columns(fields, mapping);
        if columns.is_empty() {
            return Err(ExportError::NoColumns);
        }

        let column_types: Vec<SqlType> = columns.iter().map(|f| f.sql_type()).collect();
        let untyped = SqlType::parse(UNTYPED_COLUMN);

        let column_list = columns
            .iter()
            .map(|f| Self::quote_identifier(&f.name, self.identifier_quote))
            .collect::<Vec<_>>()
            .join(", ");

        let tuples: Vec<String> = rows
            .iter()
            .map(|row| {
                let width = row.len().max(columns.len());
                let values: Vec<String> = (0..width)
                    .map(|i| {
                        let cell = row.get(i).unwrap_or(&CellValue::Null);
                        format_value(cell, column_types.get(i).unwrap_or(&untyped))
                    })
                    .collect();
                format!("({})", values.join(", "))
            })
            .collect();

        tracing::info!(
            table = table,
            columns = columns.len(),
            rows = rows.len(),
            "Generated INSERT statement"
        );

        Ok(format!(
            "INSERT INTO {} ({}) VALUES\n{};",
            Self::quote_identifier(table, self.identifier_quote),
            column_list,
            tuples.join(",\n")
        ))
    }

    /// Like [`SQLExporter::export_insert`], yielding an empty string when there is nothing to insert
    pub fn generate_insert(
        &self,
        table: &str,
        mapping: &BTreeMap<String, String>,
        fields: &[Field],
        rows: &[Row],
    ) -> String {
        self.export_insert(table, mapping, fields, rows)
            .unwrap_or_default()
    }
}
