//! Configuration for schema import and INSERT generation

use serde::{Deserialize, Serialize};
#[cfg(feature = "config-file")]
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default upload limit: 50 MiB
pub const DEFAULT_MAX_INPUT_SIZE: usize = 50 * 1024 * 1024;

/// Errors loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed TOML or unknown keys
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Grammar used by the full-grammar import strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[default]
    MySql,
    Postgres,
    Sqlite,
    Generic,
}

impl std::fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlDialect::MySql => write!(f, "mysql"),
            SqlDialect::Postgres => write!(f, "postgres"),
            SqlDialect::Sqlite => write!(f, "sqlite"),
            SqlDialect::Generic => write!(f, "generic"),
        }
    }
}

impl std::str::FromStr for SqlDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(SqlDialect::MySql),
            "postgres" | "postgresql" => Ok(SqlDialect::Postgres),
            "sqlite" => Ok(SqlDialect::Sqlite),
            "generic" => Ok(SqlDialect::Generic),
            _ => Err(format!("Unknown SQL dialect: {}", s)),
        }
    }
}

/// Identifier quoting style used in generated INSERT statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierQuote {
    /// `` `name` `` (MySQL, MariaDB)
    #[default]
    Backtick,
    /// `"name"` (PostgreSQL, standard SQL)
    Double,
    /// `[name]` (SQL Server)
    Bracket,
}

impl IdentifierQuote {
    /// Opening and closing delimiter
    pub fn delimiters(self) -> (char, char) {
        match self {
            IdentifierQuote::Backtick => ('`', '`'),
            IdentifierQuote::Double => ('"', '"'),
            IdentifierQuote::Bracket => ('[', ']'),
        }
    }
}

impl std::fmt::Display for IdentifierQuote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierQuote::Backtick => write!(f, "backtick"),
            IdentifierQuote::Double => write!(f, "double"),
            IdentifierQuote::Bracket => write!(f, "bracket"),
        }
    }
}

impl std::str::FromStr for IdentifierQuote {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "backtick" | "mysql" => Ok(IdentifierQuote::Backtick),
            "double" | "postgres" | "ansi" => Ok(IdentifierQuote::Double),
            "bracket" | "sqlserver" | "mssql" => Ok(IdentifierQuote::Bracket),
            _ => Err(format!("Unknown identifier quote style: {}", s)),
        }
    }
}

/// Configuration for schema import and INSERT generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImporterConfig {
    /// Largest SQL dump accepted, in bytes
    pub max_input_size: usize,
    /// Quoting style for table and column names
    pub identifier_quote: IdentifierQuote,
    /// Refuse to generate SQL when constraint validation reports errors
    pub validate_before_generate: bool,
    /// Grammar for the full-grammar import strategy
    pub dialect: SqlDialect,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            identifier_quote: IdentifierQuote::Backtick,
            validate_before_generate: true,
            dialect: SqlDialect::MySql,
        }
    }
}

impl ImporterConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum accepted input size in bytes
    pub fn with_max_input_size(mut self, bytes: usize) -> Self {
        self.max_input_size = bytes;
        self
    }

    /// Set identifier quoting style
    pub fn with_identifier_quote(mut self, quote: IdentifierQuote) -> Self {
        self.identifier_quote = quote;
        self
    }

    /// Enable/disable validation before generation
    pub fn with_validate_before_generate(mut self, enabled: bool) -> Self {
        self.validate_before_generate = enabled;
        self
    }

    /// Set the full-grammar dialect
    pub fn with_dialect(mut self, dialect: SqlDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Parse configuration from TOML; missing keys take their defaults
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "config-file")]
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Conventional file name looked up next to the working directory
    #[cfg(feature = "config-file")]
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join("db-importer.toml")
    }
}
