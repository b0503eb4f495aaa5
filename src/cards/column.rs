//! Source-column values preserved on every card.
//!
//! The card database is a spreadsheet export: besides the typed columns the
//! engine interprets (title, type, stats, text), rows carry arbitrary extra
//! columns (`Starting`, `Signature For`, `Wrestler Kit`, ...). Those are kept
//! verbatim after normalization so classifier logic can read them.
//!
//! ## Normalization
//!
//! - `""`, `"N/a"`, `"N/A"`, `"null"` → `Null`
//! - integer parse → `Int`
//! - float parse → `Float`
//! - anything else → `Text`

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Normalized value of a single source-table cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnValue {
    /// Integer value (costs, counts).
    Int(i64),
    /// Non-integer numeric value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Blank or sentinel cell.
    Null,
}

impl ColumnValue {
    /// Normalize a raw cell string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") || trimmed == "null" {
            return ColumnValue::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return ColumnValue::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return ColumnValue::Float(f);
        }
        ColumnValue::Text(trimmed.to_string())
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ColumnValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as a number, truncating floats.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ColumnValue::Int(v) => Some(*v),
            ColumnValue::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ColumnValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }
}

impl From<&str> for ColumnValue {
    fn from(s: &str) -> Self {
        ColumnValue::parse(s)
    }
}

/// All source columns of a card, keyed by header name.
pub type Columns = FxHashMap<String, ColumnValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_normalize_to_null() {
        assert_eq!(ColumnValue::parse(""), ColumnValue::Null);
        assert_eq!(ColumnValue::parse("  "), ColumnValue::Null);
        assert_eq!(ColumnValue::parse("N/a"), ColumnValue::Null);
        assert_eq!(ColumnValue::parse("N/A"), ColumnValue::Null);
        assert_eq!(ColumnValue::parse("null"), ColumnValue::Null);
    }

    #[test]
    fn test_numeric_parse() {
        assert_eq!(ColumnValue::parse("3"), ColumnValue::Int(3));
        assert_eq!(ColumnValue::parse("-1"), ColumnValue::Int(-1));
        assert_eq!(ColumnValue::parse("2.5"), ColumnValue::Float(2.5));
        assert_eq!(ColumnValue::parse(" 7 "), ColumnValue::Int(7));
    }

    #[test]
    fn test_text_fallback() {
        assert_eq!(
            ColumnValue::parse("TRUE"),
            ColumnValue::Text("TRUE".to_string())
        );
        assert_eq!(ColumnValue::parse("3rd").as_text(), Some("3rd"));
    }

    #[test]
    fn test_as_number_truncates_floats() {
        assert_eq!(ColumnValue::Float(2.9).as_number(), Some(2));
        assert_eq!(ColumnValue::Int(4).as_number(), Some(4));
        assert_eq!(ColumnValue::Null.as_number(), None);
    }
}
