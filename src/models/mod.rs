//! Models module for the SDK
//!
//! Defines the data structures shared by the schema importer and the INSERT
//! generator.

pub mod field;
pub mod sql_type;
pub mod table;
pub mod value;

pub use field::Field;
pub use sql_type::{IntWidth, SqlType, TypeCategory};
pub use table::Table;
pub use value::CellValue;

/// One input row, cells in mapped column order
pub type Row = Vec<CellValue>;
