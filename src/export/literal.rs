//! SQL literal rendering for cell values
//!
//! Every cell becomes either a valid literal for its column's type or `NULL`.
//! Nothing here fails: values that cannot be represented degrade to `NULL`
//! and are reported separately by the constraint validator.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{CellValue, SqlType, TypeCategory};

pub const NULL: &str = "NULL";

static TRUE_WORDS: &[&str] = &["true", "1", "yes", "y", "t"];
static FALSE_WORDS: &[&str] = &["false", "0", "no", "n", "f"];

/// Accepted date and timestamp layouts, tried in order
///
/// `shape` pins the exact width of every component: `9` is one ASCII digit,
/// anything else must match literally. chrono alone would also accept
/// unpadded months and days, and a space in place of the RFC 3339 `T`.
enum DateLayout {
    Date { shape: &'static str, fmt: &'static str },
    DateTime { shape: &'static str, fmt: &'static str },
    Rfc3339,
}

/// Fixed-width prefix of an RFC 3339 timestamp, ahead of fraction and offset
const RFC3339_SHAPE: &str = "9999-99-99T99:99:99";

static DATE_LAYOUTS: &[DateLayout] = &[
    DateLayout::Date {
        shape: "9999-99-99",
        fmt: "%Y-%m-%d",
    },
    DateLayout::DateTime {
        shape: "9999-99-99 99:99:99",
        fmt: "%Y-%m-%d %H:%M:%S",
    },
    DateLayout::Date {
        shape: "99/99/9999",
        fmt: "%m/%d/%Y",
    },
    DateLayout::Date {
        shape: "99/99/9999",
        fmt: "%d/%m/%Y",
    },
    DateLayout::Date {
        shape: "9999/99/99",
        fmt: "%Y/%m/%d",
    },
    DateLayout::Rfc3339,
];

impl DateLayout {
    fn matches(&self, text: &str) -> bool {
        match self {
            DateLayout::Date { shape, fmt } => {
                fits_shape(text.as_bytes(), shape) && NaiveDate::parse_from_str(text, fmt).is_ok()
            }
            DateLayout::DateTime { shape, fmt } => {
                fits_shape(text.as_bytes(), shape)
                    && NaiveDateTime::parse_from_str(text, fmt).is_ok()
            }
            DateLayout::Rfc3339 => {
                text.as_bytes()
                    .get(..RFC3339_SHAPE.len())
                    .is_some_and(|prefix| fits_shape(prefix, RFC3339_SHAPE))
                    && DateTime::parse_from_rfc3339(text).is_ok()
            }
        }
    }
}

fn fits_shape(bytes: &[u8], shape: &str) -> bool {
    bytes.len() == shape.len()
        && bytes.iter().zip(shape.bytes()).all(|(&b, s)| match s {
            b'9' => b.is_ascii_digit(),
            _ => b == s,
        })
}

/// Render a cell for a column of the given declared type
pub fn format_value_for(value: &CellValue, declared_type: &str) -> String {
    format_value(value, &SqlType::parse(declared_type))
}

/// Render a cell as a SQL literal for its column type
pub fn format_value(value: &CellValue, sql_type: &SqlType) -> String {
    if let CellValue::Bool(b) = value
        && sql_type.is_boolean()
    {
        return bool_literal(*b).to_string();
    }

    if value.is_null_like() {
        return NULL.to_string();
    }
    let text = value.trimmed().unwrap_or_default();

    match sql_type.category {
        TypeCategory::Numeric => format_numeric(&text),
        TypeCategory::Boolean => format_boolean(&text),
        TypeCategory::DateTime => format_datetime(&text, sql_type),
        TypeCategory::Text => quote_string(&text),
    }
}

fn bool_literal(b: bool) -> &'static str {
    if b { "TRUE" } else { "FALSE" }
}

/// Finite numbers pass through unquoted
fn format_numeric(text: &str) -> String {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => text.to_string(),
        _ => NULL.to_string(),
    }
}

fn format_boolean(text: &str) -> String {
    let lowered = text.to_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        bool_literal(true).to_string()
    } else if FALSE_WORDS.contains(&lowered.as_str()) {
        bool_literal(false).to_string()
    } else {
        NULL.to_string()
    }
}

fn format_datetime(text: &str, sql_type: &SqlType) -> String {
    if sql_type.is_zero_date(text) {
        return NULL.to_string();
    }
    if is_recognized_date(text) {
        quote_string(text)
    } else {
        NULL.to_string()
    }
}

/// True when `text` parses under one of the accepted date layouts
pub fn is_recognized_date(text: &str) -> bool {
    DATE_LAYOUTS.iter().any(|layout| layout.matches(text))
}

/// Escape text and wrap it in single quotes
///
/// Backslashes are doubled, single quotes doubled, NUL bytes dropped and
/// newline, carriage return and tab written as two-character escapes.
pub fn quote_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("''"),
            '\0' => {}
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}
