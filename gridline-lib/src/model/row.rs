//! Row identity

use uuid::Uuid;

/// The stable identity of a table row.
///
/// Backends in the wild key their entities with integers, GUIDs or opaque
/// strings; the grid treats all three uniformly. Keys are cheap to clone and
/// hashable so selection can track them in a set.
///
/// # Example
///
/// ```
/// use gridline_lib::model::RowKey;
///
/// let numeric = RowKey::from(42i64);
/// let text = RowKey::from("course-7");
/// assert_ne!(numeric, text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Integer identifier.
    Int(i64),
    /// GUID identifier.
    Guid(Uuid),
    /// Opaque string identifier.
    Text(String),
}

impl std::fmt::Display for RowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowKey::Int(n) => write!(f, "{}", n),
            RowKey::Guid(g) => write!(f, "{}", g),
            RowKey::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RowKey {
    fn from(v: i64) -> Self {
        RowKey::Int(v)
    }
}

impl From<i32> for RowKey {
    fn from(v: i32) -> Self {
        RowKey::Int(v as i64)
    }
}

impl From<Uuid> for RowKey {
    fn from(v: Uuid) -> Self {
        RowKey::Guid(v)
    }
}

impl From<String> for RowKey {
    fn from(v: String) -> Self {
        RowKey::Text(v)
    }
}

impl From<&str> for RowKey {
    fn from(v: &str) -> Self {
        RowKey::Text(v.to_string())
    }
}

/// A value the grid can present as a table row.
///
/// The grid never interprets row contents except through column accessors;
/// the only thing it asks of the row itself is a stable identity.
pub trait TableRow {
    /// Returns the stable identity of this row.
    ///
    /// The key must not change while the row is in the grid's working set.
    fn key(&self) -> RowKey;
}
