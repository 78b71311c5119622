//! Table model for the SDK

use serde::{Deserialize, Serialize};

use super::field::Field;

/// A table recovered from a schema dump
///
/// Tables are only produced by the importer when at least one field was found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    /// Table name, without schema qualifier or identifier quotes
    pub name: String,
    /// Columns in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Table {
    /// Create a new table
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// True when the table has at least one field
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}
