//! Validation functionality
//!
//! Provides validation logic for:
//! - Row constraints against declared column types (NOT NULL, numeric, range, length)
//! - Identifier checks for imported table and column names

pub mod constraints;
pub mod input;

pub use constraints::{ValidationError, Violation, check_cell, validate_rows};
pub use input::{InputError, validate_column_name, validate_table_name};
