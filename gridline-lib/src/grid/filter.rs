//! Filter engine

use std::collections::HashMap;

use super::column::Column;
use crate::error::GridError;

/// Active filter values, keyed by column.
///
/// Every list screen narrows the same way: a per-column text input matched
/// case-insensitively as a substring. Setting an empty value removes the
/// entry, so an empty input is always a no-op.
///
/// # Example
///
/// ```
/// use gridline_lib::grid::FilterState;
///
/// let mut state = FilterState::new();
/// state.set("name", "ali");
/// assert_eq!(state.get("name"), Some("ali"));
///
/// state.set("name", "");
/// assert!(state.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    entries: HashMap<String, String>,
}

impl FilterState {
    /// Creates an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter value for a column. An empty value removes the entry.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        if value.is_empty() {
            self.entries.remove(&column);
        } else {
            self.entries.insert(column, value);
        }
    }

    /// Returns the filter value for a column, if one is active.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries.get(column).map(|s| s.as_str())
    }

    /// Removes the filter value for a column.
    pub fn remove(&mut self, column: &str) {
        self.entries.remove(column);
    }

    /// Removes all filter values.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over active `(column, value)` entries.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Narrows a row collection by the active filters.
///
/// Returns the indices of kept rows in their input order. A row is kept when,
/// for every active entry, its column value converted to lowercase text
/// contains the lowercased filter substring; entries compose with logical
/// AND. An empty state keeps every row, and the operation is idempotent.
///
/// # Errors
///
/// Filtering by an unknown column or one not declared filterable is a
/// configuration error.
pub fn apply_filter<R>(
    rows: &[R],
    state: &FilterState,
    columns: &[Column<R>],
) -> Result<Vec<usize>, GridError> {
    if state.is_empty() {
        return Ok((0..rows.len()).collect());
    }

    let mut needles = Vec::new();
    for (key, value) in state.entries() {
        let column = columns
            .iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| GridError::unknown_column(key))?;
        if !column.is_filterable() {
            return Err(GridError::not_filterable(key));
        }
        needles.push((column, value.to_lowercase()));
    }

    let kept = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            needles.iter().all(|(column, needle)| {
                column.value_of(row).display_text().to_lowercase().contains(needle)
            })
        })
        .map(|(index, _)| index)
        .collect();

    Ok(kept)
}
