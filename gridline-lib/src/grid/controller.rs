//! Grid controller

use super::column::Column;
use super::filter::FilterState;
use super::filter::apply_filter;
use super::page::LoadOutcome;
use super::page::LoadState;
use super::page::PageMode;
use super::page::PageState;
use super::page::Paginator;
use super::select::SelectionMode;
use super::select::SelectionTracker;
use super::sort::Direction;
use super::sort::SortState;
use super::sort::apply_sort;
use crate::error::GridError;
use crate::model::CellDisplay;
use crate::model::RowKey;
use crate::model::TableRow;
use crate::source::PageQuery;
use crate::source::SourcePage;

/// A declared row action (edit, delete, status change).
///
/// Actions are dispatched as [`ActionIntent`] descriptors; the handlers
/// themselves live outside the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    /// Unique action key.
    pub key: String,
    /// Human-readable label.
    pub label: String,
}

/// A dispatch descriptor: which action was invoked on which row.
///
/// The grid's owner routes this to the matching row-action collaborator and,
/// on success, feeds a fresh row collection back in; the grid never refetches
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionIntent {
    /// The invoked action.
    pub action: RowAction,
    /// The target row.
    pub row: RowKey,
}

/// One header cell descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    /// The column key.
    pub key: String,
    /// The header title.
    pub title: String,
    /// Whether a sort control should be offered.
    pub sortable: bool,
    /// Whether a filter control should be offered.
    pub filterable: bool,
    /// The active sort direction, if this column is sorted.
    pub sort: Option<Direction>,
    /// The active filter value, if one is set.
    pub filter_value: Option<String>,
}

/// A group of header cells.
///
/// The grid's columns are flat, so there is a single group; the structure
/// leaves room for render surfaces that expect grouped headers.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderGroup {
    /// The header cells in declaration order.
    pub headers: Vec<HeaderCell>,
}

/// One rendered cell descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    /// The column key this cell belongs to.
    pub column: String,
    /// The structural content.
    pub content: CellDisplay,
}

/// One visible row descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// The row's stable identity.
    pub key: RowKey,
    /// Whether the row is currently selected.
    pub selected: bool,
    /// Cells in column declaration order.
    pub cells: Vec<CellView>,
}

/// The result of a navigation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Client mode: the page changed locally.
    Moved,
    /// Server mode: issue this fetch and report its outcome back.
    Fetch(PageQuery),
    /// The target page does not exist; nothing happened.
    OutOfRange,
}

/// The composed grid view model.
///
/// Pipelines the working row set through filter, sort and (client-mode)
/// pagination, and exposes render-ready header and row descriptors. The
/// controller is a pure view over its inputs: it performs no I/O, and all
/// persistence happens in external collaborators that then feed a new row
/// collection back in.
///
/// # Example
///
/// ```
/// use gridline_lib::grid::Column;
/// use gridline_lib::grid::Grid;
/// use gridline_lib::model::CellValue;
/// use gridline_lib::model::RowKey;
/// use gridline_lib::model::TableRow;
///
/// struct Student {
///     id: i64,
///     name: String,
/// }
///
/// impl TableRow for Student {
///     fn key(&self) -> RowKey {
///         self.id.into()
///     }
/// }
///
/// let mut grid = Grid::builder()
///     .column(
///         Column::new("name", "Name", |s: &Student| {
///             CellValue::from(s.name.as_str())
///         })
///         .sortable()
///         .filterable(),
///     )
///     .build()
///     .unwrap();
///
/// grid.replace_rows(vec![Student { id: 1, name: "Ali".into() }]);
/// grid.set_filter_value("name", "al").unwrap();
/// assert_eq!(grid.visible_rows().len(), 1);
/// ```
#[derive(Debug)]
pub struct Grid<R: TableRow> {
    columns: Vec<Column<R>>,
    actions: Vec<RowAction>,
    rows: Vec<R>,
    filter: FilterState,
    sort: Option<SortState>,
    selection: SelectionTracker,
    pager: Paginator,
    view: Vec<usize>,
}

impl<R: TableRow> Grid<R> {
    /// Creates a builder for constructing a grid.
    pub fn builder() -> GridBuilder<R> {
        GridBuilder::new()
    }

    // =========================================================================
    // Columns and rows
    // =========================================================================

    /// Returns the column with the given key, if declared.
    pub fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key() == key)
    }

    /// Returns the declared row actions.
    pub fn actions(&self) -> &[RowAction] {
        &self.actions
    }

    /// Returns the working row set.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the number of rows passing the active filters.
    pub fn filtered_len(&self) -> usize {
        self.view.len()
    }

    /// Replaces the working set wholesale, keeping the view state.
    ///
    /// This is the normal refresh path: the data-fetch collaborator resolves
    /// and the owner hands the new collection in. Filter, sort and selection
    /// are preserved; the current page is clamped if the set shrank.
    pub fn replace_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.refresh_view();
    }

    /// Installs a new row collection and resets all view state to defaults.
    ///
    /// For collection-identity changes (switching entity, a delete/add round
    /// trip): filter, sort, selection and page state all reset.
    pub fn load_rows(&mut self, rows: Vec<R>) {
        self.filter.clear();
        self.sort = None;
        self.selection.clear();
        let size = self.pager.size();
        self.pager = match self.pager.mode() {
            PageMode::Client => Paginator::client(size),
            PageMode::Server => Paginator::server(size),
        };
        self.rows = rows;
        self.refresh_view();
    }

    // =========================================================================
    // Filtering and sorting
    // =========================================================================

    /// Sets the filter value for a column; an empty value clears it.
    ///
    /// # Errors
    ///
    /// Rejects unknown columns and columns not declared filterable.
    pub fn set_filter_value(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), GridError> {
        let column = self
            .column(key)
            .ok_or_else(|| GridError::unknown_column(key))?;
        if !column.is_filterable() {
            return Err(GridError::not_filterable(key));
        }
        self.filter.set(key, value);
        self.refresh_view();
        Ok(())
    }

    /// Returns the active filter state.
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Sets the active sort.
    ///
    /// # Errors
    ///
    /// Rejects unknown columns and columns not declared sortable.
    pub fn set_sort(&mut self, key: &str, direction: Direction) -> Result<(), GridError> {
        let column = self
            .column(key)
            .ok_or_else(|| GridError::unknown_column(key))?;
        if !column.is_sortable() {
            return Err(GridError::not_sortable(key));
        }
        self.sort = Some(SortState {
            column: key.to_string(),
            direction,
        });
        self.refresh_view();
        Ok(())
    }

    /// Clears the active sort, restoring insertion order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.refresh_view();
    }

    /// Returns the active sort, if any.
    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Toggles a single row in or out of the selection.
    pub fn toggle_row(&mut self, key: RowKey) {
        self.selection.toggle_row(key);
    }

    /// Toggles selection of every row on the visible page.
    pub fn toggle_all_visible(&mut self) {
        let visible = self.visible_keys();
        self.selection.toggle_all_visible(&visible);
    }

    /// Returns `true` if the row is selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selection.is_selected(key)
    }

    /// Returns the selected row keys.
    pub fn selected_keys(&self) -> Vec<RowKey> {
        self.selection.selected_keys()
    }

    /// Returns the number of selected rows.
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Drains the selection for a bulk action.
    ///
    /// The returned keys go to the bulk-action collaborator; the selection is
    /// emptied so the grid never references ids the action may invalidate.
    pub fn take_bulk_selection(&mut self) -> Vec<RowKey> {
        self.selection.take()
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Returns the current pagination snapshot.
    pub fn page_state(&self) -> PageState {
        self.pager.state()
    }

    /// Returns the number of pages (always at least 1).
    pub fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    /// Navigates to a page.
    ///
    /// Out-of-range targets are a no-op, not an error: the render surface
    /// disables the button instead. In server mode the returned
    /// [`Navigation::Fetch`] query must be issued by the data-fetch
    /// collaborator and its outcome reported via [`Grid::complete_load`] or
    /// [`Grid::fail_load`].
    pub fn go_to_page(&mut self, index: usize) -> Navigation {
        if !self.pager.in_range(index) {
            return Navigation::OutOfRange;
        }
        match self.pager.mode() {
            PageMode::Client => {
                let moved = self.pager.index() != index;
                self.pager.go_to(index);
                if moved {
                    self.selection.on_page_change();
                }
                Navigation::Moved
            }
            PageMode::Server => Navigation::Fetch(self.pager.begin_load(index)),
        }
    }

    /// Navigates to the next page.
    pub fn next_page(&mut self) -> Navigation {
        self.go_to_page(self.pager.index() + 1)
    }

    /// Navigates to the previous page.
    pub fn previous_page(&mut self) -> Navigation {
        match self.pager.index() {
            0 => Navigation::OutOfRange,
            index => self.go_to_page(index - 1),
        }
    }

    /// Returns the server-mode loading state.
    pub fn load_state(&self) -> LoadState {
        self.pager.load_state()
    }

    /// Reports a resolved fetch back to a server-mode grid.
    ///
    /// Only the outcome matching the most recently requested page is applied;
    /// a late response for an abandoned navigation is discarded and the
    /// current view stays untouched.
    pub fn complete_load(&mut self, page: usize, data: SourcePage<R>) -> LoadOutcome {
        let previous = self.pager.index();
        match self.pager.complete_load(page, data.meta.as_ref()) {
            LoadOutcome::Stale => LoadOutcome::Stale,
            LoadOutcome::Applied => {
                self.rows = data.rows;
                if self.pager.index() != previous {
                    self.selection.on_page_change();
                }
                self.refresh_view();
                LoadOutcome::Applied
            }
        }
    }

    /// Reports a failed fetch back to a server-mode grid.
    ///
    /// Failures for superseded navigations are dropped silently.
    pub fn fail_load(&mut self, page: usize) -> LoadOutcome {
        self.pager.fail_load(page)
    }

    // =========================================================================
    // Render output
    // =========================================================================

    /// Returns the header descriptors.
    pub fn header_groups(&self) -> Vec<HeaderGroup> {
        let headers = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key().to_string(),
                title: column.title().to_string(),
                sortable: column.is_sortable(),
                filterable: column.is_filterable(),
                sort: self
                    .sort
                    .as_ref()
                    .filter(|s| s.column == column.key())
                    .map(|s| s.direction),
                filter_value: self.filter.get(column.key()).map(|v| v.to_string()),
            })
            .collect();
        vec![HeaderGroup { headers }]
    }

    /// Returns the row descriptors for the visible page.
    ///
    /// Zero rows is a normal state; the render surface owns the empty-state
    /// presentation.
    pub fn visible_rows(&self) -> Vec<RowView> {
        self.visible_indices()
            .iter()
            .map(|&i| {
                let row = &self.rows[i];
                let key = row.key();
                RowView {
                    selected: self.selection.is_selected(&key),
                    cells: self
                        .columns
                        .iter()
                        .map(|column| CellView {
                            column: column.key().to_string(),
                            content: column.display(row),
                        })
                        .collect(),
                    key,
                }
            })
            .collect()
    }

    /// Returns the keys of the rows on the visible page.
    pub fn visible_keys(&self) -> Vec<RowKey> {
        self.visible_indices()
            .iter()
            .map(|&i| self.rows[i].key())
            .collect()
    }

    /// Builds a dispatch descriptor for a row action.
    ///
    /// # Errors
    ///
    /// Rejects unknown action keys and rows absent from the working set.
    pub fn row_action(&self, action_key: &str, row: &RowKey) -> Result<ActionIntent, GridError> {
        let action = self
            .actions
            .iter()
            .find(|a| a.key == action_key)
            .ok_or_else(|| GridError::unknown_action(action_key))?;
        if !self.rows.iter().any(|r| r.key() == *row) {
            return Err(GridError::UnknownRow { key: row.clone() });
        }
        Ok(ActionIntent {
            action: action.clone(),
            row: row.clone(),
        })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn visible_indices(&self) -> &[usize] {
        match self.pager.mode() {
            PageMode::Client => self.pager.slice(&self.view),
            PageMode::Server => &self.view,
        }
    }

    fn refresh_view(&mut self) {
        // Filter and sort state is validated before it is stored, so the
        // engines cannot fail here.
        let mut view = apply_filter(&self.rows, &self.filter, &self.columns)
            .unwrap_or_else(|_| (0..self.rows.len()).collect());
        if let Some(sort) = &self.sort {
            let _ = apply_sort(&self.rows, &mut view, sort, &self.columns);
        }
        self.view = view;
        if self.pager.mode() == PageMode::Client {
            self.pager.set_client_total(self.view.len());
        }
    }
}

/// Builder for constructing a [`Grid`].
///
/// Columns, actions, selection mode, page mode and page size are all fixed
/// at construction; key uniqueness is checked when the grid is built.
pub struct GridBuilder<R> {
    columns: Vec<Column<R>>,
    actions: Vec<RowAction>,
    selection_mode: SelectionMode,
    page_mode: PageMode,
    page_size: usize,
}

impl<R: TableRow> GridBuilder<R> {
    fn new() -> Self {
        Self {
            columns: Vec::new(),
            actions: Vec::new(),
            selection_mode: SelectionMode::Global,
            page_mode: PageMode::Client,
            page_size: 10,
        }
    }

    /// Adds a column.
    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    /// Declares a row action.
    pub fn action(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.actions.push(RowAction {
            key: key.into(),
            label: label.into(),
        });
        self
    }

    /// Sets the selection mode. Defaults to [`SelectionMode::Global`].
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Sets the page mode. Defaults to [`PageMode::Client`].
    pub fn page_mode(mut self, mode: PageMode) -> Self {
        self.page_mode = mode;
        self
    }

    /// Sets the page size. Defaults to 10.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Builds the grid.
    ///
    /// # Errors
    ///
    /// Rejects duplicate column keys, duplicate action keys and a zero page
    /// size.
    pub fn build(self) -> Result<Grid<R>, GridError> {
        if self.page_size == 0 {
            return Err(GridError::InvalidPageSize);
        }
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.key() == column.key()) {
                return Err(GridError::duplicate_column(column.key()));
            }
        }
        for (i, action) in self.actions.iter().enumerate() {
            if self.actions[..i].iter().any(|a| a.key == action.key) {
                return Err(GridError::DuplicateAction {
                    key: action.key.clone(),
                });
            }
        }

        let pager = match self.page_mode {
            PageMode::Client => Paginator::client(self.page_size),
            PageMode::Server => Paginator::server(self.page_size),
        };

        Ok(Grid {
            columns: self.columns,
            actions: self.actions,
            rows: Vec::new(),
            filter: FilterState::new(),
            sort: None,
            selection: SelectionTracker::new(self.selection_mode),
            pager,
            view: Vec::new(),
        })
    }
}
