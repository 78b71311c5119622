//! Row-level constraint validation
//!
//! Checks NOT NULL, numeric parseability, narrow integer ranges and character
//! length bounds. All violations are collected; nothing is raised. The literal
//! formatter runs independently, so a value reported here may still be emitted
//! (as `NULL` or as written) in generated SQL.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::{CellValue, Field, IntWidth, Row, SqlType};

/// What is wrong with a cell
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("cannot be NULL")]
    NullNotAllowed,

    #[error("expected numeric value, got '{value}'")]
    NotNumeric { value: String },

    #[error("value {value} out of range for {}", .width.keyword())]
    OutOfRange { value: String, width: IntWidth },

    #[error("value length {length} exceeds maximum {max} for {declared_type}")]
    TooLong {
        length: usize,
        max: usize,
        declared_type: String,
    },
}

/// A constraint violation at a specific row and field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based row number
    pub row_index: usize,
    pub field_name: String,
    pub violation: Violation,
}

impl ValidationError {
    /// Human-readable message, without the row and field prefix
    pub fn message(&self) -> String {
        self.violation.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violation {
            Violation::NullNotAllowed => write!(
                f,
                "Row {}: Field '{}' cannot be NULL",
                self.row_index, self.field_name
            ),
            _ => write!(
                f,
                "Row {}, Field '{}': {}",
                self.row_index, self.field_name, self.violation
            ),
        }
    }
}

/// Validate rows against fields, pairing cells and fields by position
///
/// Cells beyond the field list are not checked.
pub fn validate_rows(rows: &[Row], fields: &[Field]) -> Vec<ValidationError> {
    let types: Vec<SqlType> = fields.iter().map(Field::sql_type).collect();

    let mut errors = Vec::new();
    for (row_idx, row) in rows.iter().enumerate() {
        for ((cell, field), sql_type) in row.iter().zip(fields).zip(&types) {
            if let Some(violation) = check_cell(cell, field, sql_type) {
                errors.push(ValidationError {
                    row_index: row_idx + 1,
                    field_name: field.name.clone(),
                    violation,
                });
            }
        }
    }

    if !errors.is_empty() {
        tracing::warn!(
            errors = errors.len(),
            rows = rows.len(),
            "Row validation found constraint violations"
        );
    }

    errors
}

/// Validate a single cell; at most one violation is reported
pub fn check_cell(cell: &CellValue, field: &Field, sql_type: &SqlType) -> Option<Violation> {
    let trimmed = cell.trimmed().unwrap_or_default();
    let text = trimmed.as_ref();

    if cell.is_null_like() || sql_type.is_zero_date(text) {
        return (!field.nullable).then_some(Violation::NullNotAllowed);
    }

    if sql_type.is_numeric() {
        let number = match text.parse::<f64>() {
            Ok(n) if n.is_finite() => n,
            _ => {
                return Some(Violation::NotNumeric {
                    value: text.to_string(),
                });
            }
        };
        if let Some(width) = sql_type.int_width
            && !width.contains(number)
        {
            return Some(Violation::OutOfRange {
                value: text.to_string(),
                width,
            });
        }
    }

    if let Some(max) = sql_type.max_length {
        let length = text.chars().count();
        if length > max {
            return Some(Violation::TooLong {
                length,
                max,
                declared_type: sql_type.declared.clone(),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: Vec<CellValue>) -> Row {
        cells
    }

    #[test]
    fn test_not_null_violation() {
        let fields = vec![Field::new("id", "INT").with_nullable(false)];
        let errors = validate_rows(&[row(vec![CellValue::Null])], &fields);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Row 1: Field 'id' cannot be NULL");
    }

    #[test]
    fn test_nullable_accepts_null_like() {
        let fields = vec![Field::new("note", "TEXT")];
        let rows = vec![
            row(vec![CellValue::Null]),
            row(vec![CellValue::from("  ")]),
            row(vec![CellValue::from("null")]),
        ];
        assert!(validate_rows(&rows, &fields).is_empty());
    }

    #[test]
    fn test_zero_date_counts_as_null() {
        let fields = vec![Field::new("born", "DATE").with_nullable(false)];
        let errors = validate_rows(&[row(vec![CellValue::from("0000-00-00")])], &fields);
        assert_eq!(errors[0].violation, Violation::NullNotAllowed);
    }

    #[test]
    fn test_numeric_violation() {
        let fields = vec![Field::new("age", "INT")];
        let errors = validate_rows(&[row(vec![CellValue::from("abc")])], &fields);
        assert_eq!(
            errors[0].to_string(),
            "Row 1, Field 'age': expected numeric value, got 'abc'"
        );
    }

    #[test]
    fn test_tinyint_range() {
        let fields = vec![Field::new("level", "TINYINT")];
        let errors = validate_rows(&[row(vec![CellValue::from(200i64)])], &fields);
        assert_eq!(
            errors[0].to_string(),
            "Row 1, Field 'level': value 200 out of range for TINYINT"
        );
        assert!(validate_rows(&[row(vec![CellValue::from(-128i64)])], &fields).is_empty());
    }

    #[test]
    fn test_smallint_range() {
        let fields = vec![Field::new("qty", "smallint(6)")];
        let errors = validate_rows(&[row(vec![CellValue::from("40000")])], &fields);
        assert_eq!(
            errors[0].message(),
            "value 40000 out of range for SMALLINT"
        );
    }

    #[test]
    fn test_length_violation() {
        let fields = vec![Field::new("id", "INT"), Field::new("name", "VARCHAR(10)")];
        let rows = vec![row(vec![
            CellValue::from(25i64),
            CellValue::from("This name is way too long"),
        ])];
        let errors = validate_rows(&rows, &fields);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "Row 1, Field 'name': value length 25 exceeds maximum 10 for VARCHAR(10)"
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let fields = vec![Field::new("city", "CHAR(6)")];
        assert!(validate_rows(&[row(vec![CellValue::from("Zürich")])], &fields).is_empty());
    }

    #[test]
    fn test_errors_accumulate_across_rows() {
        let fields = vec![
            Field::new("id", "INT").with_nullable(false),
            Field::new("code", "CHAR(2)"),
        ];
        let rows = vec![
            row(vec![CellValue::Null, CellValue::from("ABC")]),
            row(vec![CellValue::from("x"), CellValue::from("OK")]),
        ];
        let messages: Vec<String> = validate_rows(&rows, &fields)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Row 1: Field 'id' cannot be NULL",
                "Row 1, Field 'code': value length 3 exceeds maximum 2 for CHAR(2)",
                "Row 2, Field 'id': expected numeric value, got 'x'",
            ]
        );
    }

    #[test]
    fn test_cells_beyond_fields_are_ignored() {
        let fields = vec![Field::new("id", "INT")];
        let rows = vec![row(vec![CellValue::from(1i64), CellValue::from("anything")])];
        assert!(validate_rows(&rows, &fields).is_empty());
    }

    #[test]
    fn test_violation_serializes_with_kind_tag() {
        let json = serde_json::to_value(Violation::NotNumeric {
            value: "x".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "not_numeric");
    }
}
