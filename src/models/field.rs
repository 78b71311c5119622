//! Field model for the SDK

use serde::{Deserialize, Serialize};

use super::sql_type::SqlType;

/// A column definition recovered from a `CREATE TABLE` statement
///
/// The declared type is kept verbatim (e.g. `VARCHAR(100)`, `decimal(10,2)`)
/// and only interpreted through [`SqlType`] when values are formatted or
/// validated.
///
/// # Example
///
/// ```rust
/// use db_importer_sdk::models::Field;
///
/// let field = Field::new("email", "VARCHAR(255)");
/// assert!(field.nullable);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    /// Column name
    pub name: String,
    /// Declared SQL type, exactly as written in the schema
    #[serde(rename = "type")]
    pub data_type: String,
    /// Whether the column allows NULL values (default: true)
    #[serde(default = "default_true")]
    pub nullable: bool,
}

fn default_true() -> bool {
    true
}

impl Field {
    /// Create a new nullable field
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: true,
        }
    }

    /// Set whether the field accepts NULL
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Parsed descriptor of the declared type
    pub fn sql_type(&self) -> SqlType {
        SqlType::parse(&self.data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_json_uses_type_key() {
        let field = Field::new("id", "INT").with_nullable(false);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "INT");
        assert_eq!(json["nullable"], false);
    }

    #[test]
    fn test_field_nullable_defaults_to_true() {
        let field: Field = serde_json::from_str(r#"{"name":"note","type":"TEXT"}"#).unwrap();
        assert!(field.nullable);
    }
}
