//! Import functionality
//!
//! Recovers table definitions from raw SQL schema dumps:
//! - `extract`: line-oriented statement extraction and column clause parsing
//! - `grammar`: full-grammar strategy (`sqlparser`)
//! - `pattern`: PostgreSQL and MySQL pattern strategies
//! - `sql`: the importer running the fallback chain

pub mod extract;
pub mod grammar;
pub mod pattern;
pub mod sql;

use thiserror::Error;

/// Error during import
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Input contained nothing but whitespace
    #[error("SQL input is empty")]
    EmptyInput,

    /// Input exceeds the configured size limit
    #[error("SQL input is {size} bytes, larger than the {max} byte limit")]
    InputTooLarge { size: usize, max: usize },

    /// Every strategy came back empty
    #[error("no CREATE TABLE statements could be parsed")]
    NoTablesFound,
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

pub use sql::{ParseStrategy, SQLImporter, SchemaImport};
