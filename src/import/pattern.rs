//! Pattern-based import strategies for PostgreSQL and MySQL dumps
//!
//! These only need a recognizable `CREATE TABLE <name> (` header and one
//! column per clause, so they recover tables from dumps the full grammar
//! rejects (vendor options, unusual defaults, partial files).

use once_cell::sync::Lazy;
use regex::Regex;

use super::extract::{definition_body, extract_create_statements, parse_fields};
use crate::models::Table;

/// The name must be followed by `(`, so a skipped `IF NOT EXISTS` can never
/// be read back as a table called `IF`
static POSTGRES_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)CREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?(?:[a-zA-Z0-9_]+\.)?([a-zA-Z0-9_]+)\s*\(",
    )
    .unwrap()
});

static MYSQL_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)CREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?`?([a-zA-Z0-9_]+)`?").unwrap()
});

/// PostgreSQL-oriented extraction; a `schema.` prefix is dropped from the name
pub fn parse_postgres(sql: &str) -> Vec<Table> {
    parse_with_name_pattern(sql, &POSTGRES_NAME_REGEX)
}

/// MySQL-oriented extraction; backtick-quoted names are unquoted
pub fn parse_mysql(sql: &str) -> Vec<Table> {
    parse_with_name_pattern(sql, &MYSQL_NAME_REGEX)
}

fn parse_with_name_pattern(sql: &str, name_pattern: &Regex) -> Vec<Table> {
    extract_create_statements(sql, false)
        .iter()
        .filter_map(|statement| {
            let name = name_pattern.captures(statement)?.get(1)?.as_str();
            let fields = parse_fields(definition_body(statement)?);
            if fields.is_empty() {
                return None;
            }
            Some(Table::new(name, fields))
        })
        .collect()
}
