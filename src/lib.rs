//! DB Importer SDK - schema-aware SQL INSERT generation
//!
//! Provides:
//! - Schema import: `CREATE TABLE` recovery from MySQL, MariaDB and PostgreSQL dumps
//! - Literal formatting: typed cells to SQL literals or `NULL`
//! - Constraint validation: NOT NULL, numeric, range and length checks
//! - INSERT generation from a column mapping and typed rows
//! - A request boundary (`api`) shared by every front end

pub mod api;
pub mod config;
pub mod export;
pub mod import;
pub mod models;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use api::{
    ApiError, ErrorResponse, GenerateRequest, GenerateResponse, ParseSchemaResponse,
    ValidateResponse, generate_sql, parse_schema, validate,
};
pub use config::{IdentifierQuote, ImporterConfig, SqlDialect};
pub use export::{ExportError, SQLExporter, format_value};
pub use import::{ImportError, ParseStrategy, SQLImporter, SchemaImport};
pub use models::{CellValue, Field, Row, SqlType, Table, TypeCategory};
pub use validation::{ValidationError, Violation, validate_rows};
