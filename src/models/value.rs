//! Cell values as they arrive from spreadsheet and CSV extraction

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// One cell of an input row
///
/// Serialized untagged, so a JSON row such as `[1, "Ada", null, true]` maps
/// directly onto `Number`, `Text`, `Null` and `Bool`. Dates arrive as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl CellValue {
    /// Textual rendering of the cell, `None` for `Null`
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            CellValue::Number(n) => Some(Cow::Owned(n.to_string())),
            CellValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }

    /// Trimmed textual rendering, `None` for `Null`
    pub fn trimmed(&self) -> Option<Cow<'_, str>> {
        match self.as_text()? {
            Cow::Borrowed(s) => Some(Cow::Borrowed(s.trim())),
            Cow::Owned(s) => Some(Cow::Owned(s.trim().to_string())),
        }
    }

    /// Blank, or the literal word `null` in any case
    pub fn is_null_like(&self) -> bool {
        self.trimmed()
            .is_none_or(|s| s.is_empty() || s.eq_ignore_ascii_case("null"))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "null"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value.into())
    }
}

impl From<f64> for CellValue {
    /// Non-finite floats have no JSON representation and become `Null`
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(CellValue::Number)
            .unwrap_or(CellValue::Null)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_row_deserialization() {
        let row: Vec<CellValue> = serde_json::from_str(r#"[1, "Ada", null, true, 2.5]"#).unwrap();
        assert_eq!(row[0], CellValue::from(1i64));
        assert_eq!(row[1], CellValue::from("Ada"));
        assert_eq!(row[2], CellValue::Null);
        assert_eq!(row[3], CellValue::Bool(true));
        assert_eq!(row[4], CellValue::from(2.5));
    }

    #[test]
    fn test_null_like_detection() {
        assert!(CellValue::Null.is_null_like());
        assert!(CellValue::from("   ").is_null_like());
        assert!(CellValue::from(" NULL ").is_null_like());
        assert!(!CellValue::from("nullable").is_null_like());
        assert!(!CellValue::from(0i64).is_null_like());
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(CellValue::from(f64::NAN), CellValue::Null);
        assert_eq!(CellValue::from(f64::INFINITY), CellValue::Null);
    }

    #[test]
    fn test_trimmed_text() {
        assert_eq!(CellValue::from("  x ").trimmed().as_deref(), Some("x"));
        assert_eq!(CellValue::Bool(false).trimmed().as_deref(), Some("false"));
        assert!(CellValue::Null.trimmed().is_none());
    }
}
