//! Full-grammar import strategy backed by `sqlparser`
//!
//! The dump is cleaned of tool directives, split into `;`-terminated
//! `CREATE TABLE` fragments and each fragment is parsed on its own, so one
//! statement the grammar rejects does not cost the rest of the file.

use sqlparser::ast::{ColumnDef, ColumnOption, ObjectName, Statement};
use sqlparser::dialect::{Dialect, GenericDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect};
use sqlparser::parser::Parser;

use super::extract::{clean_dump, extract_create_statements};
use crate::config::SqlDialect;
use crate::models::{Field, Table};
use crate::validation::input::{validate_column_name, validate_table_name};

pub(crate) fn dialect_impl(dialect: SqlDialect) -> Box<dyn Dialect + Send + Sync> {
    match dialect {
        SqlDialect::MySql => Box::new(MySqlDialect {}),
        SqlDialect::Postgres => Box::new(PostgreSqlDialect {}),
        SqlDialect::Sqlite => Box::new(SQLiteDialect {}),
        SqlDialect::Generic => Box::new(GenericDialect {}),
    }
}

/// Parse with the default (MySQL) grammar
pub fn parse(sql: &str) -> Vec<Table> {
    parse_with_dialect(sql, SqlDialect::default())
}

/// Parse every `CREATE TABLE` fragment the grammar accepts
pub fn parse_with_dialect(sql: &str, dialect: SqlDialect) -> Vec<Table> {
    let dialect = dialect_impl(dialect);
    let cleaned = clean_dump(sql);

    let mut tables = Vec::new();
    for fragment in extract_create_statements(&cleaned, true) {
        let statements = match Parser::parse_sql(dialect.as_ref(), &fragment) {
            Ok(statements) => statements,
            Err(e) => {
                tracing::debug!("Skipping CREATE TABLE fragment rejected by grammar: {}", e);
                continue;
            }
        };

        for statement in statements {
            if let Statement::CreateTable(create) = statement {
                let table = table_from_parts(&create.name, &create.columns);
                if table.has_fields() {
                    tables.push(table);
                }
            }
        }
    }

    tables
}

fn table_from_parts(name: &ObjectName, columns: &[ColumnDef]) -> Table {
    let table_name = object_name_to_string(name);

    // Imported dumps may use valid but unusual names; warn only
    if let Err(e) = validate_table_name(&table_name) {
        tracing::warn!("Table name validation warning: {}", e);
    }

    let fields = columns
        .iter()
        .map(|col| {
            let nullable = !col
                .options
                .iter()
                .any(|opt_def| matches!(opt_def.option, ColumnOption::NotNull));

            if let Err(e) = validate_column_name(&col.name.value) {
                tracing::warn!(
                    "Column name validation warning for '{}': {}",
                    col.name.value,
                    e
                );
            }

            Field::new(col.name.value.clone(), col.data_type.to_string()).with_nullable(nullable)
        })
        .collect();

    Table::new(table_name, fields)
}

/// Final identifier of a possibly schema-qualified name
fn object_name_to_string(name: &ObjectName) -> String {
    name.0
        .last()
        .and_then(|part| part.as_ident())
        .map(|ident| ident.value.clone())
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_table() {
        let sql = "CREATE TABLE users (id INT NOT NULL, name VARCHAR(100) NOT NULL, email VARCHAR(255));";
        let tables = parse(sql);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "users");
        assert_eq!(
            tables[0].fields,
            vec![
                Field::new("id", "INT").with_nullable(false),
                Field::new("name", "VARCHAR(100)").with_nullable(false),
                Field::new("email", "VARCHAR(255)"),
            ]
        );
    }

    #[test]
    fn test_schema_qualified_name_uses_last_part() {
        let tables = parse_with_dialect(
            "CREATE TABLE public.products (\n  id INTEGER NOT NULL,\n  name TEXT\n);",
            SqlDialect::Postgres,
        );
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "products");
    }

    #[test]
    fn test_bad_fragment_is_skipped() {
        let sql = "CREATE TABLE broken (id INT NOT NULL DEFAULT ((;\nCREATE TABLE ok (\n  id INT\n);";
        let tables = parse(sql);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "ok");
    }

    #[test]
    fn test_dump_directives_are_ignored() {
        let sql = "/*!40101 SET NAMES utf8mb4 */;\nSET time_zone = \"+00:00\";\n-- Table structure\nCREATE TABLE `posts` (\n  `id` int(11) NOT NULL,\n  `title` varchar(200) DEFAULT NULL\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;\nCOMMIT;";
        let tables = parse(sql);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "posts");
        assert_eq!(tables[0].fields.len(), 2);
        assert!(!tables[0].fields[0].nullable);
        assert!(tables[0].fields[1].nullable);
    }

    #[test]
    fn test_trailing_statement_without_terminator() {
        let tables = parse("CREATE TABLE t (\n  id INT\n)");
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].fields[0].data_type, "INT");
    }
}
