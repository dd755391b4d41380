//! CellValue enum for dynamic cell values

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// A dynamic value extracted from a row by a column accessor.
///
/// Accessors return a `CellValue` so the filter and sort engines can work
/// over any row type without interpreting row contents themselves.
///
/// # Example
///
/// ```
/// use gridline_lib::model::CellValue;
///
/// let name = CellValue::from("Advanced Algebra");
/// let seats = CellValue::from(32i64);
/// let missing = CellValue::Null;
///
/// assert_eq!(missing.display_text(), "N/A");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent or null field. Renders as `"N/A"`.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal (prices, purchase totals).
    Decimal(Decimal),
    /// Text value.
    Text(String),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Decimal(_) => "decimal",
            CellValue::Text(_) => "text",
            CellValue::DateTime(_) => "datetime",
        }
    }

    /// Returns the text the grid filters on and renders by default.
    ///
    /// `Null` resolves to the `"N/A"` fallback rather than failing; a column
    /// accessor hitting a missing field is an expected situation.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Null => "N/A".to_string(),
            CellValue::Bool(true) => "Yes".to_string(),
            CellValue::Bool(false) => "No".to_string(),
            CellValue::Int(n) => n.to_string(),
            CellValue::Float(n) => n.to_string(),
            CellValue::Decimal(d) => d.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        }
    }

    /// Compares two cell values with a total ordering.
    ///
    /// Numbers compare numerically across `Int`/`Float`/`Decimal`, datetimes
    /// chronologically and text lexicographically. `Null` orders after
    /// everything else, and otherwise mixed types rank by variant so a
    /// heterogeneous column still sorts deterministically.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;

        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Greater,
            (_, Null) => Ordering::Less,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Decimal(a), Decimal(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (a, b) if a.is_numeric() && b.is_numeric() => {
                a.as_f64().total_cmp(&b.as_f64())
            }
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    /// Returns `true` for `Int`, `Float` and `Decimal` values.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CellValue::Int(_) | CellValue::Float(_) | CellValue::Decimal(_)
        )
    }

    fn as_f64(&self) -> f64 {
        match self {
            CellValue::Int(n) => *n as f64,
            CellValue::Float(n) => *n,
            CellValue::Decimal(d) => d.to_f64().unwrap_or(f64::MAX),
            _ => f64::NAN,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Int(_) | CellValue::Float(_) | CellValue::Decimal(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::DateTime(_) => 3,
            CellValue::Null => 4,
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<Decimal> for CellValue {
    fn from(v: Decimal) -> Self {
        CellValue::Decimal(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::DateTime(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[test]
    fn test_display_text_fallback() {
        assert_eq!(CellValue::Null.display_text(), "N/A");
        assert_eq!(CellValue::from(Option::<i64>::None).display_text(), "N/A");
    }

    #[test]
    fn test_numeric_cross_compare() {
        let int = CellValue::from(2i64);
        let float = CellValue::from(2.5f64);
        assert_eq!(int.compare(&float), Ordering::Less);
        assert_eq!(float.compare(&int), Ordering::Greater);
    }

    #[test]
    fn test_null_orders_last() {
        let null = CellValue::Null;
        let text = CellValue::from("zzz");
        assert_eq!(null.compare(&text), Ordering::Greater);
        assert_eq!(text.compare(&null), Ordering::Less);
    }

    #[test]
    fn test_text_lexicographic() {
        let a = CellValue::from("Algebra");
        let b = CellValue::from("Biology");
        assert_eq!(a.compare(&b), Ordering::Less);
    }
}
