//! Selection tracker

use std::collections::HashSet;

use crate::model::RowKey;

/// Whether selection survives page navigation.
///
/// Both behaviors occur in real dashboards; the mode is fixed when the grid
/// is constructed, never inferred from usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Selection resets to empty on every page navigation.
    PageScoped,
    /// Selection persists across page navigations until explicitly cleared.
    Global,
}

/// Tracks which rows are checked.
///
/// # Example
///
/// ```
/// use gridline_lib::grid::SelectionMode;
/// use gridline_lib::grid::SelectionTracker;
/// use gridline_lib::model::RowKey;
///
/// let mut selection = SelectionTracker::new(SelectionMode::Global);
/// selection.toggle_row(RowKey::from(1i64));
/// assert!(selection.is_selected(&RowKey::from(1i64)));
/// ```
#[derive(Debug, Clone)]
pub struct SelectionTracker {
    mode: SelectionMode,
    selected: HashSet<RowKey>,
}

impl SelectionTracker {
    /// Creates an empty tracker with the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// Returns the configured selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Toggles a single row in or out of the selection.
    pub fn toggle_row(&mut self, key: RowKey) {
        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
    }

    /// Toggles the whole visible page.
    ///
    /// If every visible row is already selected, all of them are deselected;
    /// otherwise every visible row becomes selected. Rows outside the visible
    /// set are untouched.
    pub fn toggle_all_visible(&mut self, visible: &[RowKey]) {
        if visible.is_empty() {
            return;
        }
        let all_selected = visible.iter().all(|key| self.selected.contains(key));
        if all_selected {
            for key in visible {
                self.selected.remove(key);
            }
        } else {
            for key in visible {
                self.selected.insert(key.clone());
            }
        }
    }

    /// Returns `true` if the row is selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    /// Returns the selected row keys.
    pub fn selected_keys(&self) -> Vec<RowKey> {
        self.selected.iter().cloned().collect()
    }

    /// Returns the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drains the selection, returning what was selected.
    ///
    /// Used after a bulk action so the grid never references ids that the
    /// action may have deleted or changed.
    pub fn take(&mut self) -> Vec<RowKey> {
        self.selected.drain().collect()
    }

    /// Notifies the tracker that the visible page changed.
    pub(crate) fn on_page_change(&mut self) {
        if self.mode == SelectionMode::PageScoped {
            self.selected.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ids: &[i64]) -> Vec<RowKey> {
        ids.iter().map(|&n| RowKey::from(n)).collect()
    }

    #[test]
    fn test_toggle_row_roundtrip() {
        let mut selection = SelectionTracker::new(SelectionMode::Global);
        selection.toggle_row(RowKey::from(7i64));
        assert!(selection.is_selected(&RowKey::from(7i64)));
        selection.toggle_row(RowKey::from(7i64));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_visible_is_its_own_inverse() {
        let visible = keys(&[1, 2, 3]);

        // From nothing selected: all, then none again.
        let mut selection = SelectionTracker::new(SelectionMode::Global);
        selection.toggle_all_visible(&visible);
        assert_eq!(selection.len(), 3);
        selection.toggle_all_visible(&visible);
        assert!(selection.is_empty());

        // From everything selected: none, then all again.
        let mut selection = SelectionTracker::new(SelectionMode::Global);
        selection.toggle_all_visible(&visible);
        selection.toggle_all_visible(&visible);
        selection.toggle_all_visible(&visible);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_partial_selection_selects_all_visible() {
        let visible = keys(&[1, 2, 3]);
        let mut selection = SelectionTracker::new(SelectionMode::Global);
        selection.toggle_row(RowKey::from(2i64));
        selection.toggle_all_visible(&visible);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_page_scoped_clears_on_navigation() {
        let mut selection = SelectionTracker::new(SelectionMode::PageScoped);
        selection.toggle_all_visible(&keys(&[1, 2]));
        assert_eq!(selection.len(), 2);
        selection.on_page_change();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_global_survives_navigation() {
        let mut selection = SelectionTracker::new(SelectionMode::Global);
        selection.toggle_all_visible(&keys(&[1, 2]));
        selection.on_page_change();
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_take_drains() {
        let mut selection = SelectionTracker::new(SelectionMode::Global);
        selection.toggle_all_visible(&keys(&[1, 2]));
        let taken = selection.take();
        assert_eq!(taken.len(), 2);
        assert!(selection.is_empty());
    }
}
