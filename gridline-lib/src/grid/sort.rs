//! Sort engine

use super::column::Column;
use crate::error::GridError;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// The active sort: a single column and direction.
///
/// The grid supports single-column sort only, matching the list screens it
/// models; there is no secondary ordering.
///
/// # Example
///
/// ```
/// use gridline_lib::grid::SortState;
///
/// let by_name = SortState::asc("name");
/// let by_score = SortState::desc("score");
/// assert_ne!(by_name, by_score);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SortState {
    /// The key of the column being sorted.
    pub column: String,
    /// The sort direction.
    pub direction: Direction,
}

impl SortState {
    /// Creates an ascending sort on a column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Desc,
        }
    }
}

/// Orders a view of rows by the active sort.
///
/// `indices` is the current view (typically the filter engine's output); it
/// is reordered in place with a **stable** sort over the accessor's values,
/// so rows that compare equal keep their order relative to the input.
/// `Desc` reverses the comparator, not the sorted vector, which preserves
/// that tie order in both directions.
///
/// # Errors
///
/// Sorting by an unknown column or one not declared sortable is a
/// configuration error.
pub fn apply_sort<R>(
    rows: &[R],
    indices: &mut Vec<usize>,
    sort: &SortState,
    columns: &[Column<R>],
) -> Result<(), GridError> {
    let column = columns
        .iter()
        .find(|c| c.key() == sort.column)
        .ok_or_else(|| GridError::unknown_column(&sort.column))?;
    if !column.is_sortable() {
        return Err(GridError::not_sortable(&sort.column));
    }

    // Extract sort keys once; accessors are pure but not necessarily cheap.
    let mut keyed: Vec<(usize, crate::model::CellValue)> = indices
        .iter()
        .map(|&i| (i, column.value_of(&rows[i])))
        .collect();

    keyed.sort_by(|(_, a), (_, b)| {
        let ordering = a.compare(b);
        match sort.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });

    *indices = keyed.into_iter().map(|(i, _)| i).collect();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    struct Entry {
        name: &'static str,
        score: i64,
    }

    fn columns() -> Vec<Column<Entry>> {
        vec![
            Column::new("name", "Name", |e: &Entry| CellValue::from(e.name)).sortable(),
            Column::new("score", "Score", |e: &Entry| e.score.into()).sortable(),
            Column::new("fixed", "Fixed", |_: &Entry| CellValue::Null),
        ]
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { name: "carol", score: 70 },
            Entry { name: "alice", score: 90 },
            Entry { name: "dave", score: 70 },
            Entry { name: "bob", score: 80 },
        ]
    }

    #[test]
    fn test_ascending_by_score() {
        let rows = entries();
        let mut view: Vec<usize> = (0..rows.len()).collect();
        apply_sort(&rows, &mut view, &SortState::asc("score"), &columns()).unwrap();
        assert_eq!(view, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_descending_preserves_tie_order() {
        let rows = entries();
        let mut view: Vec<usize> = (0..rows.len()).collect();
        apply_sort(&rows, &mut view, &SortState::desc("score"), &columns()).unwrap();
        // carol (index 0) and dave (index 2) tie on 70 and keep input order.
        assert_eq!(view, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_rejects_non_sortable_column() {
        let rows = entries();
        let mut view: Vec<usize> = (0..rows.len()).collect();
        let err = apply_sort(&rows, &mut view, &SortState::asc("fixed"), &columns()).unwrap_err();
        assert_eq!(err, GridError::not_sortable("fixed"));
    }

    #[test]
    fn test_rejects_unknown_column() {
        let rows = entries();
        let mut view: Vec<usize> = (0..rows.len()).collect();
        let err = apply_sort(&rows, &mut view, &SortState::asc("nope"), &columns()).unwrap_err();
        assert_eq!(err, GridError::unknown_column("nope"));
    }
}
