//! Declarative column model

use crate::model::CellDisplay;
use crate::model::CellValue;

type Accessor<R> = Box<dyn Fn(&R) -> CellValue + Send + Sync>;
type Renderer<R> = Box<dyn Fn(&CellValue, &R) -> CellDisplay + Send + Sync>;

/// Declares how one facet of a row is extracted and rendered.
///
/// The accessor must return a value deterministically and without side
/// effects; the renderer must be a pure function from value and row to a
/// [`CellDisplay`] descriptor. Columns are neither sortable nor filterable
/// until declared so.
///
/// # Example
///
/// ```
/// use gridline_lib::grid::Column;
/// use gridline_lib::model::CellValue;
///
/// struct Course {
///     title: String,
///     seats: i64,
/// }
///
/// let title = Column::new("title", "Title", |c: &Course| {
///     CellValue::from(c.title.as_str())
/// })
/// .sortable()
/// .filterable();
///
/// let seats = Column::new("seats", "Seats", |c: &Course| c.seats.into()).sortable();
/// ```
pub struct Column<R> {
    key: String,
    title: String,
    accessor: Accessor<R>,
    renderer: Option<Renderer<R>>,
    sortable: bool,
    filterable: bool,
}

impl<R> Column<R> {
    /// Creates a new column with the given key, header title and accessor.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            accessor: Box::new(accessor),
            renderer: None,
            sortable: false,
            filterable: false,
        }
    }

    /// Marks the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Marks the column as filterable.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Sets a custom renderer for this column.
    ///
    /// Without one, the cell renders as plain text via
    /// [`CellValue::display_text`].
    pub fn render(
        mut self,
        renderer: impl Fn(&CellValue, &R) -> CellDisplay + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Returns the column key, unique per grid.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the header title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns `true` if the sort engine may order by this column.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Returns `true` if the filter engine may narrow by this column.
    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    /// Extracts this column's value from a row.
    pub fn value_of(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Renders this column's cell for a row.
    pub fn display(&self, row: &R) -> CellDisplay {
        let value = self.value_of(row);
        match &self.renderer {
            Some(renderer) => renderer(&value, row),
            None => CellDisplay::Text(value.display_text()),
        }
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .finish_non_exhaustive()
    }
}
