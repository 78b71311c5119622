//! Export functionality
//!
//! Turns mapped tabular rows into SQL:
//! - `literal`: per-cell SQL literal rendering
//! - `sql`: INSERT statement assembly

pub mod literal;
pub mod sql;

/// Error during export
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("no rows to insert")]
    NoRows,
    #[error("no schema field is targeted by the column mapping")]
    NoColumns,
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

// Re-export for convenience
pub use literal::{format_value, format_value_for, quote_string};
pub use sql::SQLExporter;
