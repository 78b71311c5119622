//! Identifier checks for imported schemas and generation requests.
//!
//! Dumps frequently contain names that are legal once quoted but unusual
//! (reserved words, spaces, leading digits). These checks never block an
//! import; callers log the result as a warning.

use thiserror::Error;

/// Maximum identifier length accepted by MySQL and PostgreSQL alike
pub const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Reasons an identifier looks unusual
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Identifier is empty
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Identifier exceeds the portable length limit
    #[error("{field} exceeds maximum length (max: {max}, got: {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Identifier needs quoting to be usable
    #[error("{field} contains invalid characters: {reason}")]
    InvalidCharacters { field: &'static str, reason: String },

    /// Identifier must not start with this character
    #[error("{0}: {1}")]
    InvalidFormat(&'static str, String),

    /// Identifier is a SQL keyword
    #[error("{field} is a reserved word: {word}")]
    ReservedWord { field: &'static str, word: String },
}

/// Result type for identifier checks
pub type InputResult<T> = Result<T, InputError>;

/// Check a table name.
///
/// # Examples
///
/// ```
/// use db_importer_sdk::validation::input::validate_table_name;
///
/// assert!(validate_table_name("users").is_ok());
/// assert!(validate_table_name("").is_err());
/// assert!(validate_table_name("select").is_err());
/// ```
pub fn validate_table_name(name: &str) -> InputResult<()> {
    validate_identifier("table name", name)
}

/// Check a column name.
pub fn validate_column_name(name: &str) -> InputResult<()> {
    validate_identifier("column name", name)
}

fn validate_identifier(field: &'static str, name: &str) -> InputResult<()> {
    let first_char = match name.chars().next() {
        Some(c) => c,
        None => return Err(InputError::Empty(field)),
    };

    let length = name.chars().count();
    if length > MAX_IDENTIFIER_LENGTH {
        return Err(InputError::TooLong {
            field,
            max: MAX_IDENTIFIER_LENGTH,
            actual: length,
        });
    }

    if !first_char.is_alphabetic() && first_char != '_' {
        return Err(InputError::InvalidFormat(
            field,
            "must start with a letter or underscore".to_string(),
        ));
    }

    if let Some(c) = name.chars().find(|c| !c.is_alphanumeric() && *c != '_' && *c != '$') {
        return Err(InputError::InvalidCharacters {
            field,
            reason: format!("invalid character: '{}'", c),
        });
    }

    if is_sql_reserved_word(name) {
        return Err(InputError::ReservedWord {
            field,
            word: name.to_string(),
        });
    }

    Ok(())
}

/// Check if a word is a SQL reserved word.
fn is_sql_reserved_word(word: &str) -> bool {
    const RESERVED_WORDS: &[&str] = &[
        "select", "from", "where", "insert", "update", "delete", "create", "drop", "alter",
        "table", "index", "view", "database", "schema", "grant", "revoke", "commit", "rollback",
        "primary", "foreign", "key", "references", "constraint", "unique", "check", "default",
        "not", "null", "and", "or", "in", "between", "like", "is", "case", "when", "then", "else",
        "as", "on", "join", "group", "by", "having", "order", "limit", "union", "all", "distinct",
        "values", "set", "into",
    ];

    RESERVED_WORDS.contains(&word.to_lowercase().as_str())
}
