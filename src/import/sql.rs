//! SQL Import functionality
//!
//! Provides parsing of CREATE TABLE statements from MySQL, MariaDB and
//! PostgreSQL dumps.
//!
//! Three strategies are tried in a fixed order and the first one that yields at
//! least one table wins; results are never merged:
//!
//! 1. [`ParseStrategy::Grammar`]: full SQL grammar via `sqlparser`
//! 2. [`ParseStrategy::Postgres`]: pattern extraction, schema prefixes stripped
//! 3. [`ParseStrategy::MySql`]: pattern extraction, backtick-quoted names

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ImportError, ImportResult, grammar, pattern};
use crate::config::{ImporterConfig, SqlDialect};
use crate::models::Table;

/// The strategy that produced a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStrategy {
    Grammar,
    Postgres,
    MySql,
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStrategy::Grammar => write!(f, "grammar"),
            ParseStrategy::Postgres => write!(f, "postgres"),
            ParseStrategy::MySql => write!(f, "mysql"),
        }
    }
}

type StrategyFn = fn(&str, SqlDialect) -> Vec<Table>;

fn run_grammar(sql: &str, dialect: SqlDialect) -> Vec<Table> {
    grammar::parse_with_dialect(sql, dialect)
}

fn run_postgres(sql: &str, _dialect: SqlDialect) -> Vec<Table> {
    pattern::parse_postgres(sql)
}

fn run_mysql(sql: &str, _dialect: SqlDialect) -> Vec<Table> {
    pattern::parse_mysql(sql)
}

/// Fallback chain, in priority order
static STRATEGIES: &[(ParseStrategy, StrategyFn)] = &[
    (ParseStrategy::Grammar, run_grammar),
    (ParseStrategy::Postgres, run_postgres),
    (ParseStrategy::MySql, run_mysql),
];

/// Tables recovered from a dump, with the strategy that found them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaImport {
    pub tables: Vec<Table>,
    pub strategy: ParseStrategy,
}

/// SQL Importer - parses CREATE TABLE statements
#[derive(Debug, Clone)]
pub struct SQLImporter {
    /// Dialect used by the full-grammar strategy
    pub dialect: SqlDialect,
    /// Inputs longer than this many bytes are rejected
    pub max_input_size: usize,
}

impl Default for SQLImporter {
    fn default() -> Self {
        Self::from_config(&ImporterConfig::default())
    }
}

impl SQLImporter {
    /// Create a new SQL importer with the specified grammar dialect
    pub fn new(dialect: SqlDialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn from_config(config: &ImporterConfig) -> Self {
        Self {
            dialect: config.dialect,
            max_input_size: config.max_input_size,
        }
    }

    /// Parse SQL and extract table definitions
    ///
    /// Fails on zero-byte or oversized input and when no strategy finds a
    /// table. Whitespace-only input is not empty; it finds no tables.
    pub fn parse(&self, sql: &str) -> ImportResult<SchemaImport> {
        if sql.is_empty() {
            return Err(ImportError::EmptyInput);
        }
        if sql.len() > self.max_input_size {
            return Err(ImportError::InputTooLarge {
                size: sql.len(),
                max: self.max_input_size,
            });
        }

        match self.run_chain(sql) {
            Some(import) => {
                tracing::info!(
                    strategy = %import.strategy,
                    tables = import.tables.len(),
                    "Parsed schema"
                );
                Ok(import)
            }
            None => {
                tracing::warn!("No CREATE TABLE statements recognized by any strategy");
                Err(ImportError::NoTablesFound)
            }
        }
    }

    /// Run the fallback chain, returning an empty list when nothing is found
    pub fn parse_tables(&self, sql: &str) -> Vec<Table> {
        self.run_chain(sql)
            .map(|import| import.tables)
            .unwrap_or_default()
    }

    fn run_chain(&self, sql: &str) -> Option<SchemaImport> {
        for (strategy, run) in STRATEGIES {
            let tables = run(sql, self.dialect);
            if !tables.is_empty() {
                return Some(SchemaImport {
                    tables,
                    strategy: *strategy,
                });
            }
            tracing::debug!("{} strategy found no tables, trying next", strategy);
        }
        None
    }
}
