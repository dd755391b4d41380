//! GridError for grid configuration mistakes

use crate::model::RowKey;

/// Errors raised for invalid grid configuration calls.
///
/// These are integration bugs, not runtime conditions: the grid rejects them
/// synchronously so the caller learns about a mis-wired control immediately.
/// Expected situations (empty data, no active sort, out-of-range navigation)
/// never produce a `GridError`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// No column with the given key is declared on this grid.
    #[error("Unknown column '{key}'")]
    UnknownColumn { key: String },

    /// The column exists but was not declared sortable.
    #[error("Column '{key}' is not sortable")]
    NotSortable { key: String },

    /// The column exists but was not declared filterable.
    #[error("Column '{key}' is not filterable")]
    NotFilterable { key: String },

    /// Two columns were declared with the same key.
    #[error("Duplicate column key '{key}'")]
    DuplicateColumn { key: String },

    /// Two row actions were declared with the same key.
    #[error("Duplicate action key '{key}'")]
    DuplicateAction { key: String },

    /// No row action with the given key is declared on this grid.
    #[error("Unknown row action '{key}'")]
    UnknownAction { key: String },

    /// The working set contains no row with the given key.
    #[error("No row with key {key}")]
    UnknownRow { key: RowKey },

    /// The configured page size is zero.
    #[error("Page size must be at least 1")]
    InvalidPageSize,
}

impl GridError {
    /// Creates a new unknown column error.
    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn { key: key.into() }
    }

    /// Creates a new not-sortable error.
    pub fn not_sortable(key: impl Into<String>) -> Self {
        Self::NotSortable { key: key.into() }
    }

    /// Creates a new not-filterable error.
    pub fn not_filterable(key: impl Into<String>) -> Self {
        Self::NotFilterable { key: key.into() }
    }

    /// Creates a new duplicate column error.
    pub fn duplicate_column(key: impl Into<String>) -> Self {
        Self::DuplicateColumn { key: key.into() }
    }

    /// Creates a new unknown action error.
    pub fn unknown_action(key: impl Into<String>) -> Self {
        Self::UnknownAction { key: key.into() }
    }
}
