//! Declared SQL type classification
//!
//! A declared column type such as `VARCHAR(100)` or `tinyint unsigned` is
//! parsed once into a [`SqlType`] which both the literal formatter and the
//! constraint validator consume.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Substrings identifying numeric types. Checked first.
static NUMERIC_KEYWORDS: &[&str] = &[
    "int",
    "integer",
    "tinyint",
    "smallint",
    "mediumint",
    "bigint",
    "decimal",
    "numeric",
    "float",
    "double",
    "real",
    "serial",
    "bigserial",
];

static BOOLEAN_KEYWORDS: &[&str] = &["bool", "bit"];

static DATETIME_KEYWORDS: &[&str] = &["date", "time", "timestamp", "datetime", "year"];

/// Values that mean "no date" in MySQL dumps
pub static ZERO_DATE_SENTINELS: &[&str] = &["0", "0000-00-00", "0000-00-00 00:00:00"];

static LENGTH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d+)\)").unwrap());

/// Value category a declared type falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    Numeric,
    Boolean,
    DateTime,
    Text,
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCategory::Numeric => write!(f, "numeric"),
            TypeCategory::Boolean => write!(f, "boolean"),
            TypeCategory::DateTime => write!(f, "datetime"),
            TypeCategory::Text => write!(f, "text"),
        }
    }
}

/// Narrow integer widths that get an explicit range check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntWidth {
    Tiny,
    Small,
}

impl IntWidth {
    /// Inclusive signed range
    pub fn range(self) -> (i64, i64) {
        match self {
            IntWidth::Tiny => (-128, 127),
            IntWidth::Small => (-32768, 32767),
        }
    }

    pub fn contains(self, value: f64) -> bool {
        let (min, max) = self.range();
        value >= min as f64 && value <= max as f64
    }

    /// SQL keyword used in error messages
    pub fn keyword(self) -> &'static str {
        match self {
            IntWidth::Tiny => "TINYINT",
            IntWidth::Small => "SMALLINT",
        }
    }
}

/// Parsed descriptor of a declared column type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlType {
    /// The type exactly as declared
    pub declared: String,
    pub category: TypeCategory,
    /// Character bound of `CHAR(n)` / `VARCHAR(n)` columns
    pub max_length: Option<usize>,
    pub int_width: Option<IntWidth>,
}

impl SqlType {
    /// Classify a declared type. Matching is case-insensitive and by substring,
    /// in the order numeric, boolean, datetime; anything else is text.
    pub fn parse(declared: &str) -> Self {
        let lowered = declared.to_lowercase();

        let category = if contains_any(&lowered, NUMERIC_KEYWORDS) {
            TypeCategory::Numeric
        } else if contains_any(&lowered, BOOLEAN_KEYWORDS) {
            TypeCategory::Boolean
        } else if contains_any(&lowered, DATETIME_KEYWORDS) {
            TypeCategory::DateTime
        } else {
            TypeCategory::Text
        };

        let int_width = if lowered.contains("int") {
            if lowered.contains("tinyint") {
                Some(IntWidth::Tiny)
            } else if lowered.contains("smallint") {
                Some(IntWidth::Small)
            } else {
                None
            }
        } else {
            None
        };

        let max_length = if lowered.contains("char") {
            LENGTH_REGEX
                .captures(&lowered)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse().ok())
        } else {
            None
        };

        Self {
            declared: declared.to_string(),
            category,
            max_length,
            int_width,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.category == TypeCategory::Numeric
    }

    pub fn is_boolean(&self) -> bool {
        self.category == TypeCategory::Boolean
    }

    pub fn is_datetime(&self) -> bool {
        self.category == TypeCategory::DateTime
    }

    /// True for the zero-date sentinels of datetime columns
    pub fn is_zero_date(&self, trimmed: &str) -> bool {
        self.is_datetime() && ZERO_DATE_SENTINELS.contains(&trimmed)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.declared)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_types() {
        for declared in ["INT", "bigint(20) unsigned", "DECIMAL(10,2)", "double", "SERIAL"] {
            assert_eq!(SqlType::parse(declared).category, TypeCategory::Numeric, "{declared}");
        }
    }

    #[test]
    fn test_numeric_wins_over_boolean() {
        // tinyint(1) is the MySQL boolean idiom but still classifies as numeric
        assert_eq!(SqlType::parse("tinyint(1)").category, TypeCategory::Numeric);
        assert_eq!(SqlType::parse("BIT(1)").category, TypeCategory::Boolean);
        assert_eq!(SqlType::parse("BOOLEAN").category, TypeCategory::Boolean);
    }

    #[test]
    fn test_datetime_types() {
        for declared in ["DATE", "DATETIME", "TIMESTAMP", "TIME", "YEAR"] {
            assert_eq!(SqlType::parse(declared).category, TypeCategory::DateTime, "{declared}");
        }
    }

    #[test]
    fn test_text_fallback() {
        assert_eq!(SqlType::parse("VARCHAR(255)").category, TypeCategory::Text);
        assert_eq!(SqlType::parse("json").category, TypeCategory::Text);
        assert_eq!(SqlType::parse("").category, TypeCategory::Text);
    }

    #[test]
    fn test_descriptor_details() {
        let varchar = SqlType::parse("VARCHAR(10)");
        assert_eq!(varchar.max_length, Some(10));
        assert_eq!(varchar.to_string(), "VARCHAR(10)");

        assert_eq!(SqlType::parse("text").max_length, None);
        assert_eq!(SqlType::parse("TINYINT").int_width, Some(IntWidth::Tiny));
        assert_eq!(SqlType::parse("smallint(6)").int_width, Some(IntWidth::Small));
        assert_eq!(SqlType::parse("INT").int_width, None);
    }

    #[test]
    fn test_int_width_ranges() {
        assert!(IntWidth::Tiny.contains(127.0));
        assert!(!IntWidth::Tiny.contains(128.0));
        assert!(IntWidth::Small.contains(-32768.0));
        assert!(!IntWidth::Small.contains(-32769.0));
    }

    #[test]
    fn test_zero_date_only_for_datetime() {
        assert!(SqlType::parse("DATE").is_zero_date("0000-00-00"));
        assert!(!SqlType::parse("INT").is_zero_date("0"));
    }
}
